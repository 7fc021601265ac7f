use serde::{Deserialize, Serialize};

/// Статус заказа на бронирование
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Cancel,
    Approved,
    Rejected,
    InReviews,
    Completed,
    /// Любое значение, которое сервер прислал, но клиент ещё не знает, или его отсутствие
    #[default]
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Код статуса в API
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Cancel => "cancel",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::InReviews => "in-reviews",
            BookingStatus::Completed => "completed",
            BookingStatus::Unknown => "unknown",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancel => "Cancel",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::InReviews => "In Reviews",
            BookingStatus::Completed => "Completed",
            BookingStatus::Unknown => "Unknown",
        }
    }

    /// Все известные статусы (без `Unknown`)
    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Pending,
            BookingStatus::Cancel,
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::InReviews,
            BookingStatus::Completed,
        ]
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde_names() {
        for status in BookingStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
        }
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let status: BookingStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, BookingStatus::Unknown);
        assert_eq!(BookingStatus::default(), BookingStatus::Unknown);
    }
}
