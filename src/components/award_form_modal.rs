//! Authoring modal for award records.

use leptos::prelude::*;

use crate::components::notification_tray::{notify_error, notify_success};
use crate::net::api;
use crate::net::types::AwardRecord;
use crate::state::notify::NotifyState;
use crate::util::forms::non_empty;

#[component]
pub fn AwardFormModal(
    award: Option<AwardRecord>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let editing = award.is_some();
    let record_id = award.as_ref().map(|a| a.id.clone());

    let title = RwSignal::new(award.as_ref().map_or_else(String::new, |a| a.title.clone()));
    let date = RwSignal::new(award.as_ref().and_then(|a| a.date.clone()).unwrap_or_default());
    let awarded_by = RwSignal::new(award.as_ref().and_then(|a| a.awarded_by.clone()).unwrap_or_default());
    let description = RwSignal::new(award.as_ref().and_then(|a| a.description.clone()).unwrap_or_default());
    let image = RwSignal::new(award.as_ref().and_then(|a| a.image.clone()).unwrap_or_default());
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if title.get_untracked().trim().is_empty() {
            return;
        }
        let record = AwardRecord {
            id: record_id.clone().unwrap_or_default(),
            title: title.get_untracked().trim().to_owned(),
            date: non_empty(&date.get_untracked()),
            awarded_by: non_empty(&awarded_by.get_untracked()),
            description: non_empty(&description.get_untracked()),
            image: non_empty(&image.get_untracked()),
            created_at: 0,
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let record_id = record_id.clone();
            leptos::task::spawn_local(async move {
                let result = api::save_record(api::AWARDS, record_id.as_deref(), &record).await;
                saving.set(false);
                match result {
                    Ok(_) => {
                        notify_success(
                            notify,
                            if editing {
                                "Award updated successfully!"
                            } else {
                                "Award added successfully!"
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
                <h2>{if editing { "Edit Award" } else { "Add New Award" }}</h2>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Best Student Branch"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Date"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="2025"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Awarded By"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Regional Chapter"
                        prop:value=move || awarded_by.get()
                        on:input=move |ev| awarded_by.set(event_target_value(&ev))
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
                        placeholder="https://example.com/award.jpg"
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
                                "Update Award"
                            } else {
                                "Save Award"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
