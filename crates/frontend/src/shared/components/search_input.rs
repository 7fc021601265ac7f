//! Поле поиска с debounce и кнопкой очистки
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (применённое)
    #[prop(into)]
    value: Signal<String>,
    /// Callback, вызывается после паузы ввода
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка debounce, мс
    #[prop(optional)]
    debounce_ms: Option<u32>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let debounce_ms = debounce_ms.unwrap_or(300);

    // Локальное состояние input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Замена таймера отменяет предыдущий (Drop у Timeout снимает setTimeout)
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(debounce_ms, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
