//! Card for one roster member, shared by the admin preview list and the
//! public team pages.

use leptos::prelude::*;

use crate::components::record_image::RecordImage;
use crate::net::types::MemberRecord;
use crate::util::image::PORTRAIT_PLACEHOLDER;

/// Member card. Edit/delete affordances render only when the host supplies
/// the matching callback, so the public pages reuse the same card without
/// admin chrome.
#[component]
pub fn MemberCard(
    member: MemberRecord,
    #[prop(optional)] on_edit: Option<Callback<MemberRecord>>,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let department = member.role.department().map(str::to_owned);
    let position = member.role.position().map(str::to_owned);
    let education = member.role.education().map(str::to_owned);
    let linkedin = member.linkedin.clone();
    let image = member.image.clone();
    let name = member.name.clone();
    let designation = member.designation.clone();
    let id = member.id.clone();

    let edit_member = member;
    let on_edit_click = Callback::new(move |()| {
        if let Some(on_edit) = on_edit.as_ref() {
            on_edit.run(edit_member.clone());
        }
    });
    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id.clone());
        }
    });
    let has_actions = on_edit.is_some() || on_delete.is_some();

    view! {
        <div class="record-card record-card--member">
            <RecordImage image=image alt=name.clone() placeholder=PORTRAIT_PLACEHOLDER/>
            <div class="record-card__body">
                <h3 class="record-card__title">{name}</h3>
                <p class="record-card__subtitle">{designation}</p>
                {department.map(|department| {
                    view! { <p class="record-card__meta">"Dept: " {department}</p> }
                })}
                {position.map(|position| {
                    view! { <p class="record-card__meta">"Position: " {position}</p> }
                })}
                {education.map(|education| {
                    view! { <p class="record-card__meta">"Education: " {education}</p> }
                })}
                <div class="record-card__footer">
                    {linkedin.map(|url| {
                        view! {
                            <a
                                class="record-card__link"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "LinkedIn"
                            </a>
                        }
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
        </div>
    }
}
