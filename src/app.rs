use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::settings::PageSettings;
use crate::ui::context::provide_page_settings;
use crate::ui::{HomePage, NotFoundPage};

pub const SITE_TITLE: &str = "Disaster Awareness";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_page_settings(PageSettings::default());

    view! {
        // sets the document title
        <Title text=SITE_TITLE />

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <HomePage title=SITE_TITLE /> } />
            </Routes>
        </Router>
    }
}
