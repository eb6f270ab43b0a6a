//! Public team roster, one page per member role.
//!
//! The role comes from the route (`/team/:role`) and is pushed down to the
//! store as a server-side type filter, so the page never holds more than one
//! role's worth of records.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::member_card::MemberCard;
use crate::components::search_bar::SearchBar;
use crate::net::api;
use crate::net::types::MemberRecord;
use crate::state::browser::Browsable;
use crate::util::search::contains_ci;

/// Page heading for a role slug, or `None` for a slug we don't recognise.
fn role_title(role: &str) -> Option<&'static str> {
    match role {
        "faculty" => Some("Faculty Advisors"),
        "advisory" => Some("Advisory Board"),
        "executive" => Some("Executive Committee"),
        "core" => Some("Core Committee"),
        "member" => Some("Members"),
        _ => None,
    }
}

/// True when the member matches the query on any searchable field. A blank
/// query matches everything.
fn matches_member(member: &MemberRecord, query: &str) -> bool {
    let query = query.trim();
    query.is_empty()
        || member
            .search_haystacks()
            .iter()
            .any(|haystack| contains_ci(haystack, query))
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let params = use_params_map();
    let role = Signal::derive(move || params.read().get("role").unwrap_or_default());

    let members = RwSignal::new(Vec::<MemberRecord>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    // Re-fetch whenever the route's role segment changes.
    Effect::new(move || {
        let role = role.get();
        if role_title(&role).is_none() {
            members.set(Vec::new());
            loading.set(false);
            return;
        }
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::list_members(Some(&role)).await {
                Ok(list) => members.set(list),
                Err(err) => log::warn!("team fetch failed: {err}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
            loading.set(false);
        }
    });

    let title = Signal::derive(move || role_title(&role.get()).unwrap_or("Team"));
    let known_role = Signal::derive(move || role_title(&role.get()).is_some());
    let visible = Signal::derive(move || {
        let query = search.get();
        members
            .get()
            .into_iter()
            .filter(|member| matches_member(member, &query))
            .collect::<Vec<_>>()
    });
    let search_text = Signal::derive(move || search.get());
    let on_search = Callback::new(move |text: String| search.set(text));

    view! {
        <main class="team-page">
            <header class="team-page__header">
                <h1>{move || title.get()}</h1>
            </header>
            <Show
                when=move || known_role.get()
                fallback=|| view! { <p class="team-page__empty">"Unknown team section."</p> }
            >
                <SearchBar placeholder="Search Team" value=search_text on_input=on_search/>
                <Show when=move || loading.get()>
                    <p class="team-page__loading">"Loading members..."</p>
                </Show>
                <Show when=move || !loading.get() && visible.get().is_empty()>
                    <p class="team-page__empty">"No members found."</p>
                </Show>
                <div class="team-page__grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|member| view! { <MemberCard member=member/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </main>
    }
}
