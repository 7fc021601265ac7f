use crate::domain::a001_booking_order::ui::list::BookingOrderList;
use crate::shared::config::{load_config, Config};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Configuration is read once at mount and shared with every list via context.
    let config = load_config().unwrap_or_else(|e| {
        log::error!("{}; falling back to defaults", e);
        Config::default()
    });
    provide_context(config);

    view! {
        <ConfigProvider>
            <div class="app-main">
                <BookingOrderList />
            </div>
        </ConfigProvider>
    }
}
