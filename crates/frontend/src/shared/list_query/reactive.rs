//! Leptos binding for the list query core.
//!
//! `use_list_query` owns the fetch controller of one list page: an effect watches the
//! query parameters, issues a request whenever their key changes and commits the
//! outcome when it arrives. The controller is cancelled when the owning view is
//! cleaned up, so late responses never land in a disposed page.

use super::fetch::{FetchController, FetchError, PageData, PendingFetch};
use super::params::{QueryParameters, RequestKey, SortDirection};
use super::view_branch::ViewBranch;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct ListQuery<R: Send + Sync + 'static> {
    params: RwSignal<QueryParameters>,
    controller: RwSignal<FetchController<R>>,
    refresh: RwSignal<u64>,
}

impl<R: Send + Sync + 'static> Clone for ListQuery<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListQuery<R> {}

pub fn use_list_query<R, F, Fut>(params: RwSignal<QueryParameters>, fetch_fn: F) -> ListQuery<R>
where
    R: Clone + Send + Sync + 'static,
    F: Fn(RequestKey) -> Fut + 'static,
    Fut: Future<Output = Result<PageData<R>, FetchError>> + 'static,
{
    let query = ListQuery {
        params,
        controller: RwSignal::new(FetchController::new()),
        refresh: RwSignal::new(0),
    };
    let controller = query.controller;
    let refresh = query.refresh;

    Effect::new(move |prev_refresh: Option<u64>| {
        let key = params.with(QueryParameters::request_key);
        let nonce = refresh.get();
        let manual = prev_refresh.is_some_and(|prev| prev != nonce);

        let pending = controller
            .try_maybe_update(|c| {
                let pending = issue_for_change(c, key, manual, &fetch_fn);
                (pending.is_some(), pending)
            })
            .flatten();

        if let Some(pending) = pending {
            log!("list query: fetching {}", pending.ticket.request_key());
            spawn_local(async move {
                let (ticket, outcome) = pending.resolve().await;
                let committed = controller.try_maybe_update(|c| {
                    let committed = c.complete(&ticket, outcome);
                    (committed, committed)
                });
                match committed {
                    Some(true) => {}
                    Some(false) => {
                        log!("list query: dropped stale response for {}", ticket.request_key())
                    }
                    None => log!(
                        "list query: view disposed, response for {} ignored",
                        ticket.request_key()
                    ),
                }
            });
        }

        nonce
    });

    on_cleanup(move || {
        controller.try_update_untracked(|c| c.cancel());
    });

    query
}

/// A changed key always fetches. An unchanged key fetches again only on a manual refresh.
fn issue_for_change<R, F, Fut>(
    controller: &mut FetchController<R>,
    key: RequestKey,
    manual: bool,
    fetch_fn: &F,
) -> Option<PendingFetch<Fut>>
where
    F: Fn(RequestKey) -> Fut,
{
    let pending = controller.on_key_changed(key, |k| fetch_fn(k.clone()));
    if pending.is_none() && manual {
        return controller.refetch(|k| fetch_fn(k.clone()));
    }
    pending
}

impl<R: Clone + Send + Sync + 'static> ListQuery<R> {
    pub fn branch(&self) -> ViewBranch {
        self.controller.with(|c| ViewBranch::select(c.state()))
    }

    pub fn is_loading(&self) -> bool {
        self.controller.with(|c| c.state().is_loading())
    }

    pub fn data(&self) -> Option<PageData<R>> {
        self.controller.with(|c| c.state().data().cloned())
    }

    pub fn error(&self) -> Option<String> {
        self.controller
            .with(|c| c.state().error().map(str::to_string))
    }

    pub fn set_search(&self, search: String) {
        self.replace(|p| p.set_search(search));
    }

    pub fn set_sort(&self, sort: SortDirection) {
        self.replace(|p| p.set_sort(sort));
    }

    pub fn set_rows(&self, rows: u32) {
        self.replace(|p| p.set_rows(rows));
    }

    pub fn set_page(&self, page: u32) {
        self.replace(|p| p.set_page(page));
    }

    /// Fetches the current parameters again even though their key did not change.
    pub fn refetch(&self) {
        self.refresh.update(|n| *n += 1);
    }

    fn replace(&self, next: impl FnOnce(&QueryParameters) -> QueryParameters) {
        self.params.maybe_update(|p| {
            let next = next(p);
            if next == *p {
                return false;
            }
            *p = next;
            true
        });
    }
}
