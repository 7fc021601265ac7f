//! Общая обёртка ответов REST API.
//!
//! Сервер всегда отвечает конвертом `{ result_code, result, data }`:
//! при успехе полезная нагрузка лежит в `data`, при ошибке причина в `result`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub result_code: Option<u16>,
    #[serde(default)]
    pub result: Option<ApiResult>,
    pub data: Option<T>,
}

/// Текстовый блок результата
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiResult {
    /// Причина ошибки для показа пользователю: `error`, иначе `message`
    pub fn reason(&self) -> Option<&str> {
        let not_blank = |s: &&str| !s.trim().is_empty();
        self.error
            .as_deref()
            .filter(not_blank)
            .or(self.message.as_deref().filter(not_blank))
    }
}

impl<T> ApiEnvelope<T> {
    pub fn reason(&self) -> Option<&str> {
        self.result.as_ref().and_then(ApiResult::reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_reason() {
        let json = r#"{
            "result_code": 11,
            "result": { "title": "FAILURE", "error": "Sorry! Booking orders not found" }
        }"#;
        let env: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(env.data.is_none());
        assert_eq!(env.reason(), Some("Sorry! Booking orders not found"));
    }

    #[test]
    fn test_blank_reason_is_ignored() {
        let result = ApiResult {
            title: None,
            message: Some("  ".to_string()),
            error: None,
        };
        assert_eq!(result.reason(), None);
    }

    #[test]
    fn test_blank_error_falls_back_to_message() {
        let result = ApiResult {
            title: None,
            message: Some("Orders are unavailable".to_string()),
            error: Some(String::new()),
        };
        assert_eq!(result.reason(), Some("Orders are unavailable"));
    }
}
