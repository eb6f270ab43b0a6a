//! Card for one event, shared by the admin preview list and the public
//! events page.

use leptos::prelude::*;

use crate::components::record_image::RecordImage;
use crate::net::types::EventRecord;
use crate::util::image::BANNER_PLACEHOLDER;

#[component]
pub fn EventCard(
    event: EventRecord,
    #[prop(optional)] on_edit: Option<Callback<EventRecord>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let image = event.image.clone();
    let title = event.title.clone();
    let date = event.date.clone();
    let venue = event.venue.clone();
    let description = event.description.clone();
    let id = event.id.clone();

    let edit_event = event;
    let on_edit_click = Callback::new(move |()| {
        if let Some(on_edit) = on_edit.as_ref() {
            on_edit.run(edit_event.clone());
        }
    });
    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id.clone());
        }
    });
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let when_where = if venue.is_empty() {
        date.clone()
    } else {
        format!("{date} • {venue}")
    };

    view! {
        <div class="record-card record-card--event">
            <RecordImage image=image alt=title.clone() placeholder=BANNER_PLACEHOLDER/>
            <div class="record-card__body">
                <h3 class="record-card__title">{title}</h3>
                <p class="record-card__meta">{when_where}</p>
                <p class="record-card__description">{description}</p>
                {has_actions.then(|| {
                    view! {
                        <div class="record-card__actions">
                            <button
                                class="btn record-card__edit"
                                title="Edit"
                                on:click=move |_| on_edit_click.run(())
                            >
                                "Edit"
                            </button>
                            <button
                                class="btn record-card__delete"
                                title="Delete"
                                on:click=move |_| on_delete_click.run(())
                            >
                                "Delete"
                            </button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
