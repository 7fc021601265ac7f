//! Fetch boundary for the booking orders list.

use crate::shared::list_query::{FetchError, PageData, RequestKey};
use contracts::domain::a001_booking_order::{BookingOrderDto, BookingOrderListResponse};
use contracts::shared::api_envelope::ApiEnvelope;
use gloo_net::http::Request;

/// `GET {endpoint_url}?{key}&_ts=...`
///
/// The cache buster only goes on the URL, the request key stays as derived.
pub async fn fetch_booking_orders(
    endpoint_url: String,
    key: RequestKey,
) -> Result<PageData<BookingOrderDto>, FetchError> {
    let cache_buster = js_sys::Date::now() as i64;
    let url = format!("{}?{}&_ts={}", endpoint_url, key, cache_buster);

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let detail = response
            .json::<ApiEnvelope<serde_json::Value>>()
            .await
            .ok()
            .and_then(|env| env.reason().map(str::to_string));
        return Err(FetchError::Status {
            code: response.status(),
            text: response.status_text(),
            detail,
        });
    }

    let envelope = response
        .json::<ApiEnvelope<BookingOrderListResponse>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;
    into_page(envelope)
}

fn into_page(
    envelope: ApiEnvelope<BookingOrderListResponse>,
) -> Result<PageData<BookingOrderDto>, FetchError> {
    let reason = envelope.reason().map(str::to_string);
    match envelope.data {
        Some(list) => Ok(PageData {
            rows: list.rows,
            current_page: list.current_page.max(1),
            total_pages: list.total_page,
        }),
        None => Err(FetchError::Decode(
            reason.unwrap_or_else(|| "response has no data".to_string()),
        )),
    }
}
