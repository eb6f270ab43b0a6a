//! Public events listing with free-text search and a result count.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::search_bar::SearchBar;
use crate::net::api;
use crate::net::types::EventRecord;
use crate::util::search::contains_ci;

/// True when the event matches the query on its title or description.
/// A blank query matches everything.
fn matches_event(event: &EventRecord, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || contains_ci(&event.title, query) || contains_ci(&event.description, query)
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = RwSignal::new(Vec::<EventRecord>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_events().await {
            Ok(list) => events.set(list),
            Err(err) => log::warn!("events fetch failed: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let visible = Signal::derive(move || {
        let query = search.get();
        events
            .get()
            .into_iter()
            .filter(|event| matches_event(event, &query))
            .collect::<Vec<_>>()
    });
    let shown = Signal::derive(move || visible.get().len());
    let search_text = Signal::derive(move || search.get());
    let on_search = Callback::new(move |text: String| search.set(text));

    view! {
        <main class="events-page">
            <header class="events-page__header">
                <h1>"Events"</h1>
                <p class="events-page__tagline">
                    "Workshops, talks, and everything else the chapter is running."
                </p>
            </header>
            <SearchBar placeholder="Search Events" value=search_text on_input=on_search/>
            <Show when=move || loading.get()>
                <p class="events-page__loading">"Loading events..."</p>
            </Show>
            <Show when=move || !loading.get()>
                <p class="events-page__count">
                    {move || format!("Showing {} events", shown.get())}
                </p>
            </Show>
            <Show when=move || !loading.get() && visible.get().is_empty()>
                <p class="events-page__empty">"No events found."</p>
            </Show>
            <div class="events-page__grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|event| {
                            let href = format!("/events/{}", event.id);
                            view! {
                                <a class="events-page__card-link" href=href>
                                    <EventCard event=event/>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </main>
    }
}
