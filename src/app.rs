mod contact;
mod header;
mod homepage;
mod resume;
mod scroll;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, static_routes::StaticRoute, SsrMode};

use crate::{
    config::{pkg_href, BASE_PATH},
    portfolio::profile,
};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let stylesheet = pkg_href(&options.site_pkg_dir, &format!("{}.css", options.output_name));
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="stylesheet" id="leptos" href=stylesheet />
                <MetaTags />
            </head>
            <body class="bg-gray-900 text-gray-100 font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let profile = profile();

    view! {
        <Title formatter=move |title| format!("{} - {title}", profile.name) />
        <Meta name="description" content=profile.about.as_str() />

        <Router base=BASE_PATH>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=path!("/")
                    view=HomePage
                    ssr=SsrMode::Static(StaticRoute::new())
                />
            </Routes>
        </Router>
    }
}
