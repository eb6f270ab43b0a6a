//! Card for one award in the admin preview list.

use leptos::prelude::*;

use crate::components::record_image::RecordImage;
use crate::net::types::AwardRecord;
use crate::util::image::BANNER_PLACEHOLDER;

#[component]
pub fn AwardCard(
    award: AwardRecord,
    #[prop(optional)] on_edit: Option<Callback<AwardRecord>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let image = award.image.clone();
    let title = award.title.clone();
    let date = award.date.clone();
    let awarded_by = award.awarded_by.clone();
    let description = award.description.clone();
    let id = award.id.clone();

    let edit_award = award;
    let on_edit_click = Callback::new(move |()| {
        if let Some(on_edit) = on_edit.as_ref() {
            on_edit.run(edit_award.clone());
        }
    });
    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id.clone());
        }
    });
    let has_actions = on_edit.is_some() || on_delete.is_some();

    view! {
        <div class="record-card record-card--award">
            <RecordImage image=image alt=title.clone() placeholder=BANNER_PLACEHOLDER/>
            <div class="record-card__body">
                <h3 class="record-card__title">{title}</h3>
                {date.map(|date| {
                    view! { <p class="record-card__meta">"Date: " {date}</p> }
                })}
                {awarded_by.map(|awarded_by| {
                    view! { <p class="record-card__meta">"Awarded by " {awarded_by}</p> }
                })}
                {description.map(|description| {
                    view! { <p class="record-card__description">{description}</p> }
                })}
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
