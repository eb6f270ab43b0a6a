//! Single consumer of the process-wide notification queue.
//!
//! Producers call `notify_success`/`notify_error`; each push schedules its
//! own expiry after the fixed TTL, and the tray renders whatever is live.

use leptos::prelude::*;

use crate::state::notify::{NOTICE_TTL_MS, NoticeKind, NotifyState};

/// Push a notice and schedule its expiry.
pub fn push_notice(notify: RwSignal<NotifyState>, kind: NoticeKind, text: String) {
    let mut id = 0;
    notify.update(|state| id = state.push(kind, text));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_TTL_MS)).await;
        notify.update(|state| state.expire(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn notify_success(notify: RwSignal<NotifyState>, text: impl Into<String>) {
    push_notice(notify, NoticeKind::Success, text.into());
}

pub fn notify_error(notify: RwSignal<NotifyState>, text: impl Into<String>) {
    push_notice(notify, NoticeKind::Error, text.into());
}

/// Renders the live notification queue with manual dismissal.
#[component]
pub fn NotificationTray() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="notification-tray" aria-live="polite">
            {move || {
                notify
                    .get()
                    .queue
                    .into_iter()
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "notice notice--success",
                            NoticeKind::Error => "notice notice--error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=class>
                                <span class="notice__text">{notice.text}</span>
                                <button
                                    class="notice__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| notify.update(|state| state.expire(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
