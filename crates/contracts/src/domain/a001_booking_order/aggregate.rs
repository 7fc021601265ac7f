use crate::enums::BookingStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Кто оформил бронирование
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookedBy {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
}

/// Забронированный номер
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookedRoom {
    #[serde(default)]
    pub room_name: String,
}

/// Заказ на бронирование (строка списка, как её отдаёт API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingOrderDto {
    /// ID заказа на сервере
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,

    /// Даты бронирования; сервер присылает ISO timestamps, храним только дату.
    /// `null` и нераспознанные даты пропускаются, строка при этом остаётся в списке
    #[serde(default, deserialize_with = "calendar_dates")]
    pub booking_dates: Vec<NaiveDate>,

    #[serde(default)]
    pub booking_status: BookingStatus,

    #[serde(default)]
    pub booking_by: Option<BookedBy>,

    #[serde(default)]
    pub room: Option<BookedRoom>,
}

impl BookingOrderDto {
    /// Имя забронировавшего (пустая строка, если сервер его не прислал)
    pub fn booker_name(&self) -> &str {
        self.booking_by
            .as_ref()
            .map(|b| b.full_name.as_str())
            .unwrap_or("")
    }

    /// Название номера (пустая строка, если сервер его не прислал)
    pub fn room_name(&self) -> &str {
        self.room.as_ref().map(|r| r.room_name.as_str()).unwrap_or("")
    }
}

/// Страница списка заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingOrderListResponse {
    #[serde(default)]
    pub rows: Vec<BookingOrderDto>,
    #[serde(default)]
    pub total_docs: u64,
    #[serde(default)]
    pub total_page: u32,
    #[serde(default = "first_page")]
    pub current_page: u32,
}

fn first_page() -> u32 {
    1
}

/// "2023-01-05T00:00:00.000Z" и "2023-01-05" -> 2023-01-05
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

fn calendar_dates<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .iter()
        .flatten()
        .filter_map(|s| parse_calendar_date(s))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_row() {
        let json = r#"{
            "_id": "64a1f0",
            "booking_dates": ["2023-07-01T00:00:00.000Z", "2023-07-02"],
            "booking_status": "approved",
            "booking_by": { "fullName": "Alice Doe", "email": "alice@example.com" },
            "room": { "room_name": "Sea View 101", "room_slug": "sea-view-101" }
        }"#;

        let row: BookingOrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, "64a1f0");
        assert_eq!(
            row.booking_dates,
            vec![
                NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 7, 2).unwrap(),
            ]
        );
        assert_eq!(row.booking_status, BookingStatus::Approved);
        assert_eq!(row.booker_name(), "Alice Doe");
        assert_eq!(row.room_name(), "Sea View 101");
    }

    #[test]
    fn test_missing_relations_are_empty() {
        let json = r#"{ "_id": "1", "booking_status": "pending" }"#;
        let row: BookingOrderDto = serde_json::from_str(json).unwrap();
        assert!(row.booking_dates.is_empty());
        assert_eq!(row.booker_name(), "");
        assert_eq!(row.room_name(), "");
    }

    #[test]
    fn test_unparsable_dates_are_skipped() {
        let json = r#"{
            "_id": "1",
            "booking_dates": ["soon", null, "2023-07-03T10:00:00.000Z"],
            "booking_status": "pending"
        }"#;
        let row: BookingOrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(
            row.booking_dates,
            vec![NaiveDate::from_ymd_opt(2023, 7, 3).unwrap()]
        );
    }

    #[test]
    fn test_null_dates_are_empty() {
        let json = r#"{ "_id": "1", "booking_dates": null, "booking_status": "approved" }"#;
        let row: BookingOrderDto = serde_json::from_str(json).unwrap();
        assert!(row.booking_dates.is_empty());
        assert_eq!(row.booking_status, BookingStatus::Approved);
    }

    #[test]
    fn test_missing_status_is_unknown() {
        let json = r#"{ "_id": "1", "booking_dates": ["2023-07-01"] }"#;
        let row: BookingOrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(row.booking_status, BookingStatus::Unknown);
    }

    #[test]
    fn test_one_bad_row_keeps_the_page() {
        let json = r#"{
            "rows": [
                { "_id": "1", "booking_dates": ["2023-07-01"], "booking_status": "pending" },
                { "_id": "2", "booking_dates": null },
                { "_id": "3", "booking_dates": ["later"], "booking_status": "completed" }
            ],
            "total_page": 1,
            "current_page": 1
        }"#;
        let page: BookingOrderListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.rows[1].booking_status, BookingStatus::Unknown);
        assert!(page.rows[2].booking_dates.is_empty());
    }

    #[test]
    fn test_list_response_defaults() {
        let page: BookingOrderListResponse = serde_json::from_str(r#"{ "rows": [] }"#).unwrap();
        assert!(page.rows.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_page, 0);
    }
}
