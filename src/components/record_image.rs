//! Record image with a fixed placeholder fallback.
//!
//! A broken or missing image is purely a rendering concern; the record
//! itself always stays in the view.

#[cfg(test)]
#[path = "record_image_test.rs"]
mod record_image_test;

use leptos::prelude::*;

use crate::util::image::display_url;

/// Whether a load error should swap the source to the placeholder. Once the
/// placeholder itself is showing, further errors are ignored so a broken
/// placeholder URL cannot re-trigger the load/error cycle.
fn should_swap(current: &str, placeholder: &str) -> bool {
    current != placeholder
}

#[component]
pub fn RecordImage(
    image: Option<String>,
    alt: String,
    placeholder: &'static str,
) -> impl IntoView {
    let src = RwSignal::new(display_url(image.as_deref(), placeholder).to_owned());

    view! {
        <img
            class="record-card__image"
            src=move || src.get()
            alt=alt
            on:error=move |_| {
                if should_swap(&src.get_untracked(), placeholder) {
                    src.set(placeholder.to_owned());
                }
            }
        />
    }
}
