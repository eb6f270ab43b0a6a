//! Authoring modal for event records.

use leptos::prelude::*;

use crate::components::notification_tray::{notify_error, notify_success};
use crate::net::api;
use crate::net::types::EventRecord;
use crate::state::notify::NotifyState;
use crate::util::forms::non_empty;

#[component]
pub fn EventFormModal(
    event: Option<EventRecord>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let editing = event.is_some();
    let record_id = event.as_ref().map(|e| e.id.clone());

    let title = RwSignal::new(event.as_ref().map_or_else(String::new, |e| e.title.clone()));
    let date = RwSignal::new(event.as_ref().map_or_else(String::new, |e| e.date.clone()));
    let venue = RwSignal::new(event.as_ref().map_or_else(String::new, |e| e.venue.clone()));
    let description = RwSignal::new(event.as_ref().map_or_else(String::new, |e| e.description.clone()));
    let image = RwSignal::new(event.as_ref().and_then(|e| e.image.clone()).unwrap_or_default());
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if title.get_untracked().trim().is_empty() {
            return;
        }
        let record = EventRecord {
            id: record_id.clone().unwrap_or_default(),
            title: title.get_untracked().trim().to_owned(),
            date: date.get_untracked().trim().to_owned(),
            venue: venue.get_untracked().trim().to_owned(),
            description: description.get_untracked().trim().to_owned(),
            image: non_empty(&image.get_untracked()),
            created_at: 0,
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let record_id = record_id.clone();
            leptos::task::spawn_local(async move {
                let result = api::save_record(api::EVENTS, record_id.as_deref(), &record).await;
                saving.set(false);
                match result {
                    Ok(_) => {
                        notify_success(
                            notify,
                            if editing {
                                "Event updated successfully!"
                            } else {
                                "Event added successfully!"
                            },
                        );
                        on_saved.run(());
                        on_close.run(());
                    }
                    Err(err) => notify_error(notify, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (record, notify);
            saving.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{if editing { "Edit Event" } else { "Add New Event" }}</h2>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Tech Symposium"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="12 March 2026"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Venue"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Main Auditorium"
                        prop:value=move || venue.get()
                        on:input=move |ev| venue.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Image URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://example.com/banner.jpg"
                        prop:value=move || image.get()
                        on:input=move |ev| image.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if editing {
                                "Update Event"
                            } else {
                                "Save Event"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
