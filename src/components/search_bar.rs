//! Free-text search input bound to a browser signal.

use leptos::prelude::*;

/// Search input. Empty text means "no filter"; every keystroke reports the
/// full current value.
#[component]
pub fn SearchBar(
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
