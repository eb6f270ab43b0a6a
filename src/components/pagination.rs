//! Previous/Next pagination controls.
//!
//! Bounds are clamped by disabling the buttons, never by wrapping.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    can_prev: Signal<bool>,
    can_next: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn pagination__prev"
                disabled=move || !can_prev.get()
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <button
                class="btn pagination__next"
                disabled=move || !can_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
