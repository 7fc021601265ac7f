pub mod state;

use self::state::create_state;
use crate::domain::a001_booking_order::api::fetch_booking_orders;
use crate::shared::api_utils::api_url;
use crate::shared::components::{PaginationControls, SearchInput};
use crate::shared::config::Config;
use crate::shared::date_utils::format_date_list;
use crate::shared::icons::icon;
use crate::shared::list_query::{use_list_query, ListQuery, SortDirection, ViewBranch};
use contracts::domain::a001_booking_order::BookingOrderDto;
use contracts::enums::BookingStatus;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

const TABLE_ID: &str = "a001-booking-order-table";

/// Цвет бейджа статуса
pub fn status_badge_color(status: BookingStatus) -> BadgeColor {
    match status {
        BookingStatus::Pending => BadgeColor::Informative,
        BookingStatus::Cancel => BadgeColor::Warning,
        BookingStatus::Approved => BadgeColor::Success,
        BookingStatus::Rejected => BadgeColor::Danger,
        BookingStatus::InReviews => BadgeColor::Important,
        BookingStatus::Completed => BadgeColor::Brand,
        BookingStatus::Unknown => BadgeColor::Subtle,
    }
}

/// Ключ строки: id с сервера, а если его нет, позиция на странице
fn row_key(index: usize, row: &BookingOrderDto) -> String {
    if row.id.is_empty() {
        format!("#{}", index)
    } else {
        row.id.clone()
    }
}

#[component]
pub fn BookingOrderList(
    /// Действие "Update Status" для строки; получает id заказа
    #[prop(optional)]
    on_update_status: Option<Callback<String>>,
    /// Скрыть поле поиска (сортировка и размер страницы остаются)
    #[prop(optional)]
    disabled_search: bool,
) -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let endpoint_url = api_url(config.api.port, &config.orders.endpoint);
    let page_size_options = config.orders.page_size_options.clone();
    let debounce_ms = config.orders.search_debounce_ms;

    let params = create_state();
    let query: ListQuery<BookingOrderDto> = use_list_query(params, move |key| {
        fetch_booking_orders(endpoint_url.clone(), key)
    });

    let on_update_status = on_update_status.unwrap_or_else(|| {
        Callback::new(|id: String| log!("Update status requested for booking order {}", id))
    });

    // inputs bound to Thaw controls
    let sort_value = RwSignal::new(params.get_untracked().sort().as_str().to_string());
    Effect::new(move |_| {
        let v = sort_value.get();
        if let Some(sort) = SortDirection::from_code(&v) {
            untrack(move || query.set_sort(sort));
        }
    });

    let rows_value = RwSignal::new(params.get_untracked().rows().to_string());
    Effect::new(move |_| {
        let v = rows_value.get();
        if let Ok(rows) = v.parse::<u32>() {
            untrack(move || query.set_rows(rows));
        }
    });

    let search_value = Signal::derive(move || params.with(|p| p.search().to_string()));

    view! {
        <div class="page" id="a001_booking_order--list" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">"Booking Orders"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| query.refetch()
                        disabled=Signal::derive(move || query.is_loading())
                    >
                        {icon("refresh")}
                        {move || if query.is_loading() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        {(!disabled_search).then(|| view! {
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Search:"</Label>
                                <SearchInput
                                    value=search_value
                                    on_change=Callback::new(move |text: String| query.set_search(text))
                                    debounce_ms=debounce_ms
                                    placeholder="Guest name, room..."
                                />
                            </Flex>
                        })}
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Sort:"</Label>
                            <Select value=sort_value size=SelectSize::Small>
                                <option value=SortDirection::Desc.as_str()>"Descending"</option>
                                <option value=SortDirection::Asc.as_str()>"Ascending"</option>
                            </Select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Rows:"</Label>
                            <Select value=rows_value size=SelectSize::Small>
                                {page_size_options
                                    .into_iter()
                                    .map(|size| view! {
                                        <option value=size.to_string()>{size.to_string()}</option>
                                    })
                                    .collect_view()}
                            </Select>
                        </Flex>
                    </Flex>
                </div>

                {move || match query.branch() {
                    ViewBranch::Error => view! {
                        <div class="alert alert--error">
                            <strong>"Failed to fetch"</strong>
                            <div>{query.error().unwrap_or_default()}</div>
                        </div>
                    }.into_any(),
                    ViewBranch::Loading => view! {
                        <LoadingSkeleton rows=params.with_untracked(|p| p.rows()).min(10) />
                    }.into_any(),
                    ViewBranch::Empty => view! {
                        <div class="empty-state">"Sorry! Any data was not found."</div>
                    }.into_any(),
                    ViewBranch::Populated => view! {
                        <BookingOrderTable
                            rows=query.data().map(|d| d.rows).unwrap_or_default()
                            on_update_status=on_update_status
                        />
                    }.into_any(),
                }}

                {move || {
                    query.data().filter(|d| d.has_more_pages()).map(|d| view! {
                        <PaginationControls
                            current_page=d.current_page
                            total_pages=d.total_pages
                            on_page_change=Callback::new(move |page: u32| query.set_page(page))
                        />
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn LoadingSkeleton(rows: u32) -> impl IntoView {
    view! {
        <div class="table-skeleton">
            <Flex gap=FlexGap::Small>
                <Spinner />
                <span>"Loading..."</span>
            </Flex>
            {(0..rows).map(|_| view! { <div class="table-skeleton__row"></div> }).collect_view()}
        </div>
    }
}

#[component]
fn BookingOrderTable(rows: Vec<BookingOrderDto>, on_update_status: Callback<String>) -> impl IntoView {
    let rows: Vec<(String, BookingOrderDto)> = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| (row_key(i, &row), row))
        .collect();

    view! {
        <div class="table-wrapper">
            <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 800px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=180.0>"Booking Dates"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Booking Status"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"Booked By"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"Booked Room"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>"Booking Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.clone()
                        key=|(key, _)| key.clone()
                        children=move |(_, row)| {
                            let order_id = row.id.clone();
                            let status = row.booking_status;
                            let booking_dates = format_date_list(&row.booking_dates);
                            let booker_name = row.booker_name().to_string();
                            let room_name = row.room_name().to_string();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {booking_dates}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge appearance=BadgeAppearance::Tint color=status_badge_color(status)>
                                                {status.display_name()}
                                            </Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {booker_name}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            {room_name}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            size=ButtonSize::Small
                                            on_click=move |_| on_update_status.run(order_id.clone())
                                        >
                                            "Update Status"
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
