//! Query-driven pagination for server-backed lists.
//!
//! - [`params`]: immutable query parameters and the request key derived from them
//! - [`fetch`]: the fetch lifecycle controller
//! - [`view_branch`]: which body a list renders for a fetch state
//! - [`reactive`]: the Leptos hook wiring them together

pub mod fetch;
pub mod params;
pub mod reactive;
pub mod view_branch;

pub use fetch::{FetchController, FetchError, FetchState, FetchTicket, PageData, PendingFetch};
pub use params::{derive_key, QueryParameters, RequestKey, SortDirection};
pub use reactive::{use_list_query, ListQuery};
pub use view_branch::ViewBranch;
