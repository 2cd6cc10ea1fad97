//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::room::RoomPage;
use crate::state::session::SessionPairState;

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
/// Provides the session-pair context and sets up client-side routing. Both
/// `/` and `/room/:id` render [`RoomPage`]; the bare route simply has no room
/// id and shows the join placeholder.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let sessions = RwSignal::new(SessionPairState::default());
    provide_context(sessions);

    view! {
        <Stylesheet id="leptos" href="/pkg/dualboard.css"/>
        <Title text="Dualboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RoomPage/>
                <Route path=(StaticSegment("room"), ParamSegment("id")) view=RoomPage/>
            </Routes>
        </Router>
    }
}
