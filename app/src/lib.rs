pub mod components;
pub mod content;
pub mod icons;
pub mod pages;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

use crate::components::{Footer, NavBar};
use crate::content::SITE;

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
            <body id="top">
                <App/>
            </body>
        </html>
    }
}

/// Page titles read "{page} - {site}", a page without a title gets the site title alone.
pub fn format_title(text: String) -> String {
    if text.is_empty() {
        String::from(SITE.title)
    } else {
        format!("{} - {}", text, SITE.title)
    }
}

// Every route registers exactly one description, this one covers unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Meta name="description" content={SITE.description} />
        <p class="not-found">"Page not found."</p>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Title formatter=format_title/>

        <Router>
            <NavBar />
            // Nothing on these pages is loaded asynchronously, render them in full on the server.
            <Routes fallback=NotFound>
                <Route
                    path=StaticSegment("")
                    view=pages::about::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("about")
                    view=pages::about::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("projects")
                    view=pages::projects::Index
                    ssr=SsrMode::Async
                />
            </Routes>
            <Footer />
        </Router>
    }
}
