//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::page_shell::PageShell;
use crate::pages::{home::HomePage, not_found::NotFoundPage, requests::RequestsPage};
use crate::state::{theme::ThemeState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
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
/// Provides the theme and chrome contexts and maps `/` and `/demandes` to
/// their pages, each wrapped in the page shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(theme);
    provide_context(ui);

    // The stored preference is only readable in the browser; load it after
    // hydration so server and client markup agree.
    Effect::new(move || {
        theme.set(crate::util::dark_mode::init());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/amt.css"/>
        <Title text="AMT - Absence Management Tool"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <PageShell><HomePage/></PageShell> }
                />
                <Route
                    path=StaticSegment("demandes")
                    view=|| view! { <PageShell><RequestsPage/></PageShell> }
                />
            </Routes>
        </Router>
    }
}
