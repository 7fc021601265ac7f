use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page numbers shown around the current page, at most `width` of them.
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let width = width.min(total);
    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total - width + 1);
    (start..start + width).collect()
}

/// Page to request for a click, if it is within `1..=total`.
///
/// The page shown as current is requestable too: when the server clamped an
/// out-of-range request, re-selecting it brings the query back in line.
pub fn page_request(page: u32, total: u32) -> Option<u32> {
    (1..=total).contains(&page).then_some(page)
}

/// PaginationControls component - 1-based page navigation
///
/// Offers only pages `1..=total_pages`; the page reported by the server is highlighted.
#[component]
pub fn PaginationControls(
    /// Current page (1-based, as reported by the server)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// How many numbered buttons to show (optional, defaults to 5)
    #[prop(optional)]
    window: Option<u32>,
) -> impl IntoView {
    let window = window.unwrap_or(5);

    let go = move |page: u32| {
        if let Some(page) = page_request(page, total_pages.get_untracked()) {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(1)
                disabled=move || current_page.get() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get(), window)
                    .into_iter()
                    .map(|page| {
                        let class = if page == current {
                            "pagination-btn pagination-btn--active"
                        } else {
                            "pagination-btn"
                        };
                        view! {
                            <button class=class on:click=move |_| go(page)>
                                {page.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked() + 1)
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(total_pages.get_untracked())
                disabled=move || current_page.get() >= total_pages.get()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
