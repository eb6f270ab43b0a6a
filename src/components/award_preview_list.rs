//! Admin preview list for awards: search, pagination, and
//! delete-with-confirmation over one fetched snapshot.

use leptos::prelude::*;

use crate::components::award_card::AwardCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notification_tray::{notify_error, notify_success};
use crate::components::pagination::Pagination;
use crate::components::search_bar::SearchBar;
use crate::net::api;
use crate::net::types::AwardRecord;
use crate::state::browser::BrowserState;
use crate::state::notify::NotifyState;

#[component]
pub fn AwardPreviewList(
    #[prop(into)] refresh_epoch: Signal<u64>,
    on_edit: Callback<AwardRecord>,
) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let browser = RwSignal::new(BrowserState::<AwardRecord>::default());

    let refresh = Callback::new(move |()| {
        let mut token = 0;
        browser.update(|state| token = state.begin_refresh());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::list_awards().await;
            let mut error = None;
            browser.update(|state| error = state.apply_snapshot(token, result, false));
            if let Some(err) = error {
                log::warn!("award refresh failed: {err}");
                notify_error(notify, err.to_string());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notify;
            browser.update(|state| {
                let _ = state.apply_snapshot(token, Ok(Vec::new()), false);
            });
        }
    });

    Effect::new(move || {
        let _ = refresh_epoch.get();
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
            match api::delete_record(api::AWARDS, &id).await {
                Ok(()) => {
                    browser.update(|state| state.delete_succeeded());
                    notify_success(notify, "Award deleted successfully!");
                    refresh.run(());
                }
                Err(err) => notify_error(notify, err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let loading = Signal::derive(move || browser.get().loading);
    let search_text = Signal::derive(move || browser.get().search_text);
    let can_prev = Signal::derive(move || browser.with(BrowserState::can_prev));
    let can_next = Signal::derive(move || browser.with(BrowserState::can_next));
    let no_results = Signal::derive(move || browser.with(|state| !state.loading && state.filtered().is_empty()));
    let visible = Signal::derive(move || {
        browser.with(|state| state.current_slice().into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <section class="preview-list preview-list--awards">
            <h2 class="preview-list__heading">"Awards"</h2>
            <SearchBar placeholder="Search Awards" value=search_text on_input=on_search/>
            <Show when=move || loading.get()>
                <p class="preview-list__loading">"Loading awards..."</p>
            </Show>
            <Show when=move || no_results.get()>
                <p class="preview-list__empty">
                    "No awards found. Add a new award to get started."
                </p>
            </Show>
            <div class="preview-list__grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|award| {
                            view! {
                                <AwardCard award=award on_edit=on_edit on_delete=on_delete_request/>
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
                    message="Are you sure you want to delete this award?"
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </section>
    }
}
