//! Public detail page for one event.
//!
//! There is no get-by-id in the storage contract, so the page fetches the
//! collection snapshot and selects the routed id from it; an unknown id
//! renders the not-found fallback instead of an error.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::record_image::RecordImage;
use crate::net::api;
use crate::net::types::EventRecord;
use crate::state::browser::find_record;
use crate::util::image::BANNER_PLACEHOLDER;

#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    let events = RwSignal::new(Vec::<EventRecord>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_events().await {
            Ok(list) => events.set(list),
            Err(err) => log::warn!("event details fetch failed: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let event = Signal::derive(move || {
        let id = id.get();
        events.with(|events| find_record(events, &id).cloned())
    });

    view! {
        <main class="detail-page detail-page--event">
            <a class="detail-page__back" href="/">
                "Back to Home"
            </a>
            <Show when=move || loading.get()>
                <p class="detail-page__loading">"Loading event details..."</p>
            </Show>
            <Show
                when=move || !loading.get() && event.get().is_some()
                fallback=move || {
                    (!loading.get()).then(|| {
                        view! { <h1 class="detail-page__missing">"Event Not Found"</h1> }
                    })
                }
            >
                {move || {
                    event
                        .get()
                        .map(|event| {
                            view! {
                                <article class="detail-page__body">
                                    <RecordImage
                                        image=event.image.clone()
                                        alt=event.title.clone()
                                        placeholder=BANNER_PLACEHOLDER
                                    />
                                    <h1 class="detail-page__title">{event.title.clone()}</h1>
                                    <p class="detail-page__meta">{event.date.clone()}</p>
                                    <p class="detail-page__meta">{event.venue.clone()}</p>
                                    <p class="detail-page__description">
                                        {event.description.clone()}
                                    </p>
                                </article>
                            }
                        })
                }}
            </Show>
        </main>
    }
}
