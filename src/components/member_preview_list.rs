//! Admin preview list for the member roster: type tabs, free-text search,
//! pagination, and delete-with-confirmation over one fetched snapshot.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::filter_tabs::FilterTabs;
use crate::components::member_card::MemberCard;
use crate::components::notification_tray::{notify_error, notify_success};
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::net::api;
use crate::net::types::{MemberRecord, MemberRole};
use crate::state::browser::BrowserState;
use crate::state::notify::NotifyState;

#[component]
pub fn MemberPreviewList(
    /// Bumped by the host after an authoring modal saves, forcing a re-fetch.
    #[prop(into)] refresh_epoch: Signal<u64>,
    /// Host edit-authoring flow; the list itself never mutates record fields.
    on_edit: Callback<MemberRecord>,
) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let browser = RwSignal::new(BrowserState::<MemberRecord>::default());

    // A tab selection is pushed down to the store as a server-side type
    // filter, so the client-side filter pass stays a no-op for this list.
    let refresh = Callback::new(move |()| {
        let filter = browser.get_untracked().active_filter;
        let mut token = 0;
        browser.update(|state| token = state.begin_refresh());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let server_filtered = filter.is_some();
            let result = api::list_members(filter.as_deref()).await;
            let mut error = None;
            browser.update(|state| error = state.apply_snapshot(token, result, server_filtered));
            if let Some(err) = error {
                log::warn!("member refresh failed: {err}");
                notify_error(notify, err.to_string());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notify;
            let server_filtered = filter.is_some();
            browser.update(|state| {
                let _ = state.apply_snapshot(token, Ok(Vec::new()), server_filtered);
            });
        }
    });

    // Initial fetch plus host-driven re-fetches after authoring saves.
    Effect::new(move || {
        let _ = refresh_epoch.get();
        refresh.run(());
    });

    let on_tab = Callback::new(move |filter: Option<String>| {
        browser.update(|state| state.set_filter(filter));
        refresh.run(());
    });
    let on_search = Callback::new(move |text: String| browser.update(|state| state.set_search(text)));
    let on_prev = Callback::new(move |()| browser.update(|state| state.prev_page()));
    let on_next = Callback::new(move |()| browser.update(|state| state.next_page()));
    let on_delete_request = Callback::new(move |id: String| browser.update(|state| state.request_delete(id)));
    let on_delete_cancel = Callback::new(move |()| browser.update(|state| state.cancel_delete()));

    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = browser.get_untracked().pending_delete else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_record(api::MEMBERS, &id).await {
                Ok(()) => {
                    browser.update(|state| state.delete_succeeded());
                    notify_success(notify, "Member deleted successfully!");
                    refresh.run(());
                }
                // Confirmation stays armed so the user can retry or cancel.
                Err(err) => notify_error(notify, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let loading = Signal::derive(move || browser.get().loading);
    let active_filter = Signal::derive(move || browser.get().active_filter);
    let search_text = Signal::derive(move || browser.get().search_text);
    let can_prev = Signal::derive(move || browser.with(BrowserState::can_prev));
    let can_next = Signal::derive(move || browser.with(BrowserState::can_next));
    let no_results = Signal::derive(move || browser.with(|state| !state.loading && state.filtered().is_empty()));
    let visible = Signal::derive(move || {
        browser.with(|state| state.current_slice().into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <section class="preview-list preview-list--members">
            <h2 class="preview-list__heading">"Members"</h2>
            <FilterTabs
                options=MemberRole::FILTERS.to_vec()
                all_label="All Members"
                active=active_filter
                on_select=on_tab
            />
            <SearchBar placeholder="Search Members" value=search_text on_input=on_search/>
            <Show when=move || loading.get()>
                <p class="preview-list__loading">"Loading members..."</p>
            </Show>
            <Show when=move || no_results.get()>
                <p class="preview-list__empty">
                    "No members found. Add a new member to get started."
                </p>
            </Show>
            <div class="preview-list__grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|member| {
                            view! {
                                <MemberCard
                                    member=member
                                    on_edit=on_edit
                                    on_delete=on_delete_request
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <Show when=move || !loading.get() && !no_results.get()>
                <Pagination can_prev=can_prev can_next=can_next on_prev=on_prev on_next=on_next/>
            </Show>
            <Show when=move || browser.get().pending_delete.is_some()>
                <ConfirmDialog
                    title="Confirm Deletion"
                    message="Are you sure you want to delete this member?"
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </section>
    }
}
