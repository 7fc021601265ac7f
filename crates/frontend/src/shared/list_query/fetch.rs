//! Fetch lifecycle of a list page: `Idle -> Loading -> Success | Error`.
//!
//! The controller never awaits anything itself. Issuing a request hands back a
//! [`PendingFetch`]; whoever drives the future reports the outcome through
//! [`FetchController::complete`], and only the outcome of the request that is
//! still tracked gets committed.

use super::params::RequestKey;
use std::future::Future;
use thiserror::Error;

/// One page of server data.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData<R> {
    pub rows: Vec<R>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl<R> PageData<R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pagination is offered only when there is more than one page.
    pub fn has_more_pages(&self) -> bool {
        self.total_pages > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{}", status_message(.code, .text, .detail))]
    Status {
        code: u16,
        text: String,
        detail: Option<String>,
    },
    #[error("Failed to read response: {0}")]
    Decode(String),
}

fn status_message(code: &u16, text: &str, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None if text.is_empty() => format!("Server error: {}", code),
        None => format!("{} {}", code, text),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<R> {
    Idle,
    Loading {
        request_key: RequestKey,
    },
    Success {
        request_key: RequestKey,
        data: PageData<R>,
    },
    Error {
        request_key: RequestKey,
        message: String,
    },
}

impl<R> FetchState<R> {
    pub fn request_key(&self) -> Option<&RequestKey> {
        match self {
            FetchState::Idle => None,
            FetchState::Loading { request_key }
            | FetchState::Success { request_key, .. }
            | FetchState::Error { request_key, .. } => Some(request_key),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn data(&self) -> Option<&PageData<R>> {
        match self {
            FetchState::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request. Two tickets for the same key differ by generation,
/// so a manual refetch supersedes the attempt it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    request_key: RequestKey,
    generation: u64,
}

impl FetchTicket {
    pub fn request_key(&self) -> &RequestKey {
        &self.request_key
    }
}

/// A request that has been issued but not yet completed.
pub struct PendingFetch<Fut> {
    pub ticket: FetchTicket,
    future: Fut,
}

impl<R, Fut> PendingFetch<Fut>
where
    Fut: Future<Output = Result<PageData<R>, FetchError>>,
{
    pub async fn resolve(self) -> (FetchTicket, Result<PageData<R>, FetchError>) {
        let outcome = self.future.await;
        (self.ticket, outcome)
    }
}

#[derive(Debug, Clone)]
pub struct FetchController<R> {
    state: FetchState<R>,
    tracked: Option<FetchTicket>,
    generation: u64,
    cancelled: bool,
}

impl<R> Default for FetchController<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FetchController<R> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            tracked: None,
            generation: 0,
            cancelled: false,
        }
    }

    pub fn state(&self) -> &FetchState<R> {
        &self.state
    }

    pub fn tracked_key(&self) -> Option<&RequestKey> {
        self.tracked.as_ref().map(FetchTicket::request_key)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Issues a fetch when `key` differs from the last observed key.
    ///
    /// The state moves to `Loading { key }` before `fetch_fn` is invoked, and any
    /// request still pending for an older key stops being tracked. Returns `None`
    /// when the key is unchanged or the controller has been cancelled.
    pub fn on_key_changed<F, Fut>(&mut self, key: RequestKey, fetch_fn: F) -> Option<PendingFetch<Fut>>
    where
        F: FnOnce(&RequestKey) -> Fut,
    {
        if self.cancelled || self.tracked_key() == Some(&key) {
            return None;
        }
        Some(self.issue(key, fetch_fn))
    }

    /// Re-issues the currently tracked key. Nothing to refetch before the first key.
    pub fn refetch<F, Fut>(&mut self, fetch_fn: F) -> Option<PendingFetch<Fut>>
    where
        F: FnOnce(&RequestKey) -> Fut,
    {
        if self.cancelled {
            return None;
        }
        let key = self.tracked_key()?.clone();
        Some(self.issue(key, fetch_fn))
    }

    fn issue<F, Fut>(&mut self, key: RequestKey, fetch_fn: F) -> PendingFetch<Fut>
    where
        F: FnOnce(&RequestKey) -> Fut,
    {
        self.generation += 1;
        let ticket = FetchTicket {
            request_key: key.clone(),
            generation: self.generation,
        };
        self.tracked = Some(ticket.clone());
        self.state = FetchState::Loading { request_key: key };
        let future = fetch_fn(ticket.request_key());
        PendingFetch { ticket, future }
    }

    /// Commits the outcome of `ticket` if it is still the tracked request.
    /// Returns `false` for stale tickets and after [`cancel`](Self::cancel).
    pub fn complete(&mut self, ticket: &FetchTicket, outcome: Result<PageData<R>, FetchError>) -> bool {
        if self.cancelled || self.tracked.as_ref() != Some(ticket) {
            return false;
        }
        let request_key = ticket.request_key.clone();
        self.state = match outcome {
            Ok(data) => FetchState::Success { request_key, data },
            Err(e) => FetchState::Error {
                request_key,
                message: e.to_string(),
            },
        };
        true
    }

    /// Stops accepting completions. The last committed state stays readable.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::params::QueryParameters;
    use std::cell::RefCell;
    use std::future::ready;

    type Outcome = Result<PageData<&'static str>, FetchError>;

    fn page(rows: Vec<&'static str>, current_page: u32, total_pages: u32) -> PageData<&'static str> {
        PageData {
            rows,
            current_page,
            total_pages,
        }
    }

    /// Issues a fetch whose future is never polled; the test completes the ticket itself.
    fn issue(
        controller: &mut FetchController<&'static str>,
        params: &QueryParameters,
    ) -> Option<FetchTicket> {
        controller
            .on_key_changed(params.request_key(), |_| ready::<Outcome>(Ok(page(vec![], 1, 1))))
            .map(|pending| pending.ticket)
    }

    #[test]
    fn test_starts_idle() {
        let controller = FetchController::<&'static str>::new();
        assert_eq!(controller.state(), &FetchState::Idle);
        assert!(controller.tracked_key().is_none());
    }

    #[test]
    fn test_key_change_enters_loading_and_calls_fetch() {
        let mut controller = FetchController::<&'static str>::new();
        let calls = RefCell::new(Vec::new());
        let key = QueryParameters::initial().request_key();

        let pending = controller.on_key_changed(key.clone(), |k| {
            calls.borrow_mut().push(k.clone());
            ready::<Outcome>(Ok(page(vec![], 1, 1)))
        });

        assert!(pending.is_some());
        assert_eq!(calls.borrow().as_slice(), &[key.clone()]);
        assert_eq!(
            controller.state(),
            &FetchState::Loading {
                request_key: key.clone()
            }
        );
    }

    #[test]
    fn test_same_key_does_not_refetch() {
        let mut controller = FetchController::<&'static str>::new();
        let params = QueryParameters::initial();
        assert!(issue(&mut controller, &params).is_some());
        assert!(issue(&mut controller, &params.clone()).is_none());
        // re-deriving after a no-op update is still the same key
        assert!(issue(&mut controller, &params.set_page(1)).is_none());
    }

    #[test]
    fn test_success_and_error_commit() {
        let mut controller = FetchController::new();
        let params = QueryParameters::initial();
        let ticket = issue(&mut controller, &params).unwrap();
        assert!(controller.complete(&ticket, Ok(page(vec!["a"], 1, 1))));
        assert_eq!(controller.state().data().map(|d| d.rows.len()), Some(1));

        let ticket = issue(&mut controller, &params.set_page(2)).unwrap();
        let failure = FetchError::Status {
            code: 503,
            text: "Service Unavailable".to_string(),
            detail: None,
        };
        assert!(controller.complete(&ticket, Err(failure)));
        assert_eq!(
            controller.state(),
            &FetchState::Error {
                request_key: params.set_page(2).request_key(),
                message: "503 Service Unavailable".to_string(),
            }
        );
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut controller = FetchController::new();
        let first = QueryParameters::initial().set_page(3);
        let second = first.set_search("alice");

        let ticket_a = issue(&mut controller, &first).unwrap();
        let ticket_b = issue(&mut controller, &second).unwrap();
        assert_eq!(
            controller.state(),
            &FetchState::Loading {
                request_key: second.request_key()
            }
        );

        // B finishes first, then the slow A arrives
        assert!(controller.complete(&ticket_b, Ok(page(vec!["b"], 1, 1))));
        assert!(!controller.complete(&ticket_a, Ok(page(vec!["a"], 3, 3))));

        let data = controller.state().data().unwrap();
        assert_eq!(data.rows, vec!["b"]);
        assert_eq!(controller.state().request_key(), Some(&second.request_key()));
    }

    #[test]
    fn test_stale_completion_while_newer_pending() {
        let mut controller = FetchController::new();
        let first = QueryParameters::initial();
        let ticket_a = issue(&mut controller, &first).unwrap();
        let _ticket_b = issue(&mut controller, &first.set_rows(20)).unwrap();

        assert!(!controller.complete(&ticket_a, Err(FetchError::Network("reset".into()))));
        assert!(controller.state().is_loading());
    }

    #[test]
    fn test_returning_to_earlier_key_ignores_old_ticket() {
        let mut controller = FetchController::new();
        let p1 = QueryParameters::initial();
        let p2 = p1.set_page(2);

        let old = issue(&mut controller, &p1).unwrap();
        let _ = issue(&mut controller, &p2).unwrap();
        let fresh = issue(&mut controller, &p1).unwrap();

        assert!(!controller.complete(&old, Ok(page(vec!["old"], 1, 2))));
        assert!(controller.complete(&fresh, Ok(page(vec!["fresh"], 1, 2))));
        assert_eq!(controller.state().data().unwrap().rows, vec!["fresh"]);
    }

    #[test]
    fn test_refetch_supersedes_previous_attempt() {
        let mut controller = FetchController::new();
        let params = QueryParameters::initial();
        assert!(controller
            .refetch(|_| ready::<Outcome>(Ok(page(vec![], 1, 1))))
            .is_none());

        let first = issue(&mut controller, &params).unwrap();
        assert!(controller.complete(&first, Err(FetchError::Network("offline".into()))));

        let retry = controller
            .refetch(|_| ready::<Outcome>(Ok(page(vec![], 1, 1))))
            .unwrap()
            .ticket;
        assert_eq!(retry.request_key(), first.request_key());
        assert!(controller.state().is_loading());
        assert!(!controller.complete(&first, Ok(page(vec!["late"], 1, 1))));
        assert!(controller.complete(&retry, Ok(page(vec!["retried"], 1, 1))));
        assert_eq!(controller.state().data().unwrap().rows, vec!["retried"]);
    }

    #[test]
    fn test_cancel_makes_controller_inert() {
        let mut controller = FetchController::new();
        let params = QueryParameters::initial();
        let ticket = issue(&mut controller, &params).unwrap();

        controller.cancel();
        assert!(controller.is_cancelled());
        assert!(!controller.complete(&ticket, Ok(page(vec!["a"], 1, 1))));
        assert!(controller.state().is_loading());
        assert!(issue(&mut controller, &params.set_page(2)).is_none());
    }

    #[test]
    fn test_status_message_prefers_server_detail() {
        let e = FetchError::Status {
            code: 404,
            text: "Not Found".into(),
            detail: Some("Sorry! Booking orders not found".into()),
        };
        assert_eq!(e.to_string(), "Sorry! Booking orders not found");

        let e = FetchError::Status {
            code: 500,
            text: String::new(),
            detail: None,
        };
        assert_eq!(e.to_string(), "Server error: 500");
    }

    #[test]
    fn test_has_more_pages() {
        let data = page(vec!["x"], 2, 3);
        assert!(data.has_more_pages());
        assert!(!page(vec![], 1, 1).has_more_pages());
    }
}
