//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::page::PageState;
use crate::util::preference::LocalStorage;

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
/// Builds the page controller once and provides it to every section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = RwSignal::new(PageState::default());
    provide_context(page);

    // Effects only run in the browser, after hydration, so the server-rendered
    // light markup is patched rather than mismatched.
    Effect::new(move || {
        page.update(|p| p.restore_theme(&LocalStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/playground.css"/>
        <Title text="Interactive Playground"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
