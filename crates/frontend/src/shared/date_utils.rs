/// Utilities for date formatting
///
/// Booking dates arrive from the API as calendar dates and are shown as ISO dates.
use chrono::NaiveDate;

/// Format a calendar date as YYYY-MM-DD
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Comma separated list of dates, in the order the server sent them
/// Example: [2023-07-01, 2023-07-02] -> "2023-07-01, 2023-07-02"
pub fn format_date_list(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(format_date)
        .collect::<Vec<_>>()
        .join(", ")
}
