//! Admin panel: three preview lists side by side, with shared authoring
//! modals and the notification tray.
//!
//! DESIGN
//! ======
//! The page owns a single `refresh_epoch` counter. Every preview list watches
//! it; the authoring modals bump it on a successful save, so whichever lists
//! care about the saved collection re-fetch without the page knowing which
//! collection changed. Edit flows work the other way round: a list hands the
//! clicked record up through `on_edit`, the page stashes it in an edit slot
//! and opens the matching modal pre-filled.

use leptos::prelude::*;

use crate::components::award_form_modal::AwardFormModal;
use crate::components::award_preview_list::AwardPreviewList;
use crate::components::event_form_modal::EventFormModal;
use crate::components::event_preview_list::EventPreviewList;
use crate::components::member_form_modal::MemberFormModal;
use crate::components::member_preview_list::MemberPreviewList;
use crate::components::notification_tray::NotificationTray;
use crate::net::types::{AwardRecord, EventRecord, MemberRecord};

#[component]
pub fn AdminPage() -> impl IntoView {
    let refresh_epoch = RwSignal::new(0u64);
    let on_saved = Callback::new(move |()| refresh_epoch.update(|epoch| *epoch += 1));

    let member_modal_open = RwSignal::new(false);
    let member_to_edit = RwSignal::new(None::<MemberRecord>);
    let event_modal_open = RwSignal::new(false);
    let event_to_edit = RwSignal::new(None::<EventRecord>);
    let award_modal_open = RwSignal::new(false);
    let award_to_edit = RwSignal::new(None::<AwardRecord>);

    let on_add_member = Callback::new(move |()| {
        member_to_edit.set(None);
        member_modal_open.set(true);
    });
    let on_edit_member = Callback::new(move |member: MemberRecord| {
        member_to_edit.set(Some(member));
        member_modal_open.set(true);
    });
    let on_member_close = Callback::new(move |()| member_modal_open.set(false));

    let on_add_event = Callback::new(move |()| {
        event_to_edit.set(None);
        event_modal_open.set(true);
    });
    let on_edit_event = Callback::new(move |event: EventRecord| {
        event_to_edit.set(Some(event));
        event_modal_open.set(true);
    });
    let on_event_close = Callback::new(move |()| event_modal_open.set(false));

    let on_add_award = Callback::new(move |()| {
        award_to_edit.set(None);
        award_modal_open.set(true);
    });
    let on_edit_award = Callback::new(move |award: AwardRecord| {
        award_to_edit.set(Some(award));
        award_modal_open.set(true);
    });
    let on_award_close = Callback::new(move |()| award_modal_open.set(false));

    view! {
        <main class="admin">
            <header class="admin__header">
                <h1>"Admin Panel"</h1>
                <div class="admin__actions">
                    <button class="btn btn--primary" on:click=move |_| on_add_member.run(())>
                        "Add Member"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_add_event.run(())>
                        "Add Event"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_add_award.run(())>
                        "Add Award"
                    </button>
                </div>
            </header>

            <MemberPreviewList refresh_epoch=refresh_epoch on_edit=on_edit_member/>
            <EventPreviewList refresh_epoch=refresh_epoch on_edit=on_edit_event/>
            <AwardPreviewList refresh_epoch=refresh_epoch on_edit=on_edit_award/>

            <Show when=move || member_modal_open.get()>
                <MemberFormModal
                    member=member_to_edit.get_untracked()
                    on_close=on_member_close
                    on_saved=on_saved
                />
            </Show>
            <Show when=move || event_modal_open.get()>
                <EventFormModal
                    event=event_to_edit.get_untracked()
                    on_close=on_event_close
                    on_saved=on_saved
                />
            </Show>
            <Show when=move || award_modal_open.get()>
                <AwardFormModal
                    award=award_to_edit.get_untracked()
                    on_close=on_award_close
                    on_saved=on_saved
                />
            </Show>

            <NotificationTray/>
        </main>
    }
}
