#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list_with_ssg, LeptosRoutes};
    use my_portfolio::{app::*, config::with_base, export};
    use std::path::Path;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;

    // Pre-render every static route into the site root
    let (routes, static_routes) = generate_route_list_with_ssg({
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });
    static_routes.generate(&leptos_options).await;

    let site_root = Path::new(&*leptos_options.site_root);
    let index = export::relocate_index(site_root)
        .await
        .expect("Should be able to place the rendered page in the bundle");
    tracing::info!(
        page = %index.display(),
        bundle = %export::bundle_dir(site_root).display(),
        "exported static page"
    );
    if let Err(err) = export::check_assets(site_root).await {
        tracing::warn!("{err}");
    }

    if cfg!(feature = "export") {
        return;
    }

    // the bundle directory, public assets included, is served from the site root
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options.clone());

    tracing::info!("listening on http://{}{}", &addr, with_base(""));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Should be able to serve site");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
