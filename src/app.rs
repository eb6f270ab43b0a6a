//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, award_details::AwardDetailsPage, event_details::EventDetailsPage,
    events::EventsPage, team::TeamPage,
};
use crate::state::notify::NotifyState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared notification queue and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notify = RwSignal::new(NotifyState::default());
    provide_context(notify);

    view! {
        <Stylesheet id="leptos" href="/pkg/chapterdesk.css"/>
        <Title text="ChapterDesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=EventsPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailsPage/>
                <Route path=(StaticSegment("awards"), ParamSegment("id")) view=AwardDetailsPage/>
                <Route path=(StaticSegment("team"), ParamSegment("role")) view=TeamPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
