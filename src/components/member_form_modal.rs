//! Authoring modal for member records with role-conditional fields.
//!
//! DESIGN
//! ======
//! The role select drives which fields render; assembling the tagged role
//! from raw inputs is a pure helper so the subtype mapping stays testable.
//! Saves are full-field replacement through the storage collaborator.

#[cfg(test)]
#[path = "member_form_modal_test.rs"]
mod member_form_modal_test;

use leptos::prelude::*;

use crate::components::notification_tray::{notify_error, notify_success};
use crate::net::api;
use crate::net::types::{MemberRecord, MemberRole};
use crate::state::notify::NotifyState;
use crate::util::forms::non_empty;

/// Build the tagged role from raw form inputs for the selected type key.
/// Unknown keys fall back to the plain member role.
fn assemble_role(type_key: &str, department: &str, position: &str, education: &str) -> MemberRole {
    match type_key {
        "faculty" => MemberRole::Faculty {
            department: department.trim().to_owned(),
        },
        "advisory" => MemberRole::Advisory {
            education: education.trim().to_owned(),
        },
        "executive" => MemberRole::Executive {
            position: position.trim().to_owned(),
            education: education.trim().to_owned(),
        },
        "core" => MemberRole::Core {
            position: position.trim().to_owned(),
            education: education.trim().to_owned(),
        },
        _ => MemberRole::Member {
            education: education.trim().to_owned(),
        },
    }
}

fn saved_message(editing: bool) -> &'static str {
    if editing {
        "Member updated successfully!"
    } else {
        "Member added successfully!"
    }
}

#[component]
pub fn MemberFormModal(
    /// Existing record when editing; `None` creates a new member.
    member: Option<MemberRecord>,
    on_close: Callback<()>,
    /// Invoked after a successful save so the host can re-fetch its lists.
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let editing = member.is_some();
    let record_id = member.as_ref().map(|m| m.id.clone());

    let type_key = RwSignal::new(
        member
            .as_ref()
            .map_or_else(|| "faculty".to_owned(), |m| m.role.type_key().to_owned()),
    );
    let name = RwSignal::new(member.as_ref().map_or_else(String::new, |m| m.name.clone()));
    let designation = RwSignal::new(member.as_ref().map_or_else(String::new, |m| m.designation.clone()));
    let image = RwSignal::new(member.as_ref().and_then(|m| m.image.clone()).unwrap_or_default());
    let linkedin = RwSignal::new(member.as_ref().and_then(|m| m.linkedin.clone()).unwrap_or_default());
    let department = RwSignal::new(
        member
            .as_ref()
            .and_then(|m| m.role.department().map(str::to_owned))
            .unwrap_or_default(),
    );
    let position = RwSignal::new(
        member
            .as_ref()
            .and_then(|m| m.role.position().map(str::to_owned))
            .unwrap_or_default(),
    );
    let education = RwSignal::new(
        member
            .as_ref()
            .and_then(|m| m.role.education().map(str::to_owned))
            .unwrap_or_default(),
    );
    let saving = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if name.get_untracked().trim().is_empty() || designation.get_untracked().trim().is_empty() {
            return;
        }
        let record = MemberRecord {
            id: record_id.clone().unwrap_or_default(),
            name: name.get_untracked().trim().to_owned(),
            designation: designation.get_untracked().trim().to_owned(),
            image: non_empty(&image.get_untracked()),
            linkedin: non_empty(&linkedin.get_untracked()),
            created_at: 0,
            role: assemble_role(
                &type_key.get_untracked(),
                &department.get_untracked(),
                &position.get_untracked(),
                &education.get_untracked(),
            ),
        };
        saving.set(true);
        #[cfg(feature = "hydrate")]
        {
            let record_id = record_id.clone();
            leptos::task::spawn_local(async move {
                let result = api::save_record(api::MEMBERS, record_id.as_deref(), &record).await;
                saving.set(false);
                match result {
                    Ok(_) => {
                        notify_success(notify, saved_message(editing));
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
                <h2>{if editing { "Edit Member" } else { "Add New Member" }}</h2>

                <label class="dialog__label">
                    "Member Type"
                    <select
                        class="dialog__input"
                        prop:value=move || type_key.get()
                        on:change=move |ev| type_key.set(event_target_value(&ev))
                    >
                        {MemberRole::FILTERS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <option value=*value selected=move || type_key.get() == *value>
                                        {*label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__label">
                    "Image URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://example.com/image.jpg"
                        prop:value=move || image.get()
                        on:input=move |ev| image.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="John Doe"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Designation"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Professor"
                        prop:value=move || designation.get()
                        on:input=move |ev| designation.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "LinkedIn Profile URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="https://linkedin.com/in/johndoe"
                        prop:value=move || linkedin.get()
                        on:input=move |ev| linkedin.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || type_key.get() == "faculty">
                    <label class="dialog__label">
                        "Department"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Computer Science"
                            prop:value=move || department.get()
                            on:input=move |ev| department.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <Show when=move || matches!(type_key.get().as_str(), "executive" | "core")>
                    <label class="dialog__label">
                        "Position"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Secretary"
                            prop:value=move || position.get()
                            on:input=move |ev| position.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <Show when=move || type_key.get() != "faculty">
                    <label class="dialog__label">
                        "Education"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Ph.D. in Computer Science"
                            prop:value=move || education.get()
                            on:input=move |ev| education.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

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
                                "Update Member"
                            } else {
                                "Save Member"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
