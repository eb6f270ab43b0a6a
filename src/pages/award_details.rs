//! Public detail page for one award, snapshot-fed like the event details.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::record_image::RecordImage;
use crate::net::api;
use crate::net::types::AwardRecord;
use crate::state::browser::find_record;
use crate::util::image::BANNER_PLACEHOLDER;

#[component]
pub fn AwardDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    let awards = RwSignal::new(Vec::<AwardRecord>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_awards().await {
            Ok(list) => awards.set(list),
            Err(err) => log::warn!("award details fetch failed: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let award = Signal::derive(move || {
        let id = id.get();
        awards.with(|awards| find_record(awards, &id).cloned())
    });

    view! {
        <main class="detail-page detail-page--award">
            <a class="detail-page__back" href="/">
                "Back to Home"
            </a>
            <Show when=move || loading.get()>
                <p class="detail-page__loading">"Loading award details..."</p>
            </Show>
            <Show
                when=move || !loading.get() && award.get().is_some()
                fallback=move || {
                    (!loading.get()).then(|| {
                        view! { <h1 class="detail-page__missing">"Award Not Found"</h1> }
                    })
                }
            >
                {move || {
                    award
                        .get()
                        .map(|award| {
                            view! {
                                <article class="detail-page__body">
                                    <RecordImage
                                        image=award.image.clone()
                                        alt=award.title.clone()
                                        placeholder=BANNER_PLACEHOLDER
                                    />
                                    <h1 class="detail-page__title">{award.title.clone()}</h1>
                                    {award
                                        .date
                                        .clone()
                                        .map(|date| {
                                            view! { <p class="detail-page__meta">{date}</p> }
                                        })}
                                    {award
                                        .awarded_by
                                        .clone()
                                        .map(|awarded_by| {
                                            view! {
                                                <p class="detail-page__meta">
                                                    "Awarded by " {awarded_by}
                                                </p>
                                            }
                                        })}
                                    {award
                                        .description
                                        .clone()
                                        .map(|description| {
                                            view! {
                                                <p class="detail-page__description">{description}</p>
                                            }
                                        })}
                                </article>
                            }
                        })
                }}
            </Show>
        </main>
    }
}
