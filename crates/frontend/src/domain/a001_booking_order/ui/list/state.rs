use crate::shared::list_query::QueryParameters;
use leptos::prelude::*;

pub fn create_state() -> RwSignal<QueryParameters> {
    RwSignal::new(QueryParameters::initial())
}
