use anyhow::Context;
use leptos::prelude::*;

mod errors;

use errors::{Error, Result};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let leptos_options = load_configuration().context("Could not start the server")?;
    serve(leptos_options)
        .await
        .context("Could not serve the site")
}

fn load_configuration() -> Result<LeptosOptions> {
    let conf = get_configuration(None)?;
    Ok(conf.leptos_options)
}

async fn serve(leptos_options: LeptosOptions) -> Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    let addr = leptos_options.site_addr;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    log::debug!("{} routes generated", routes.len());

    let app = axum::Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || app::shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(app::shell))
        .with_state(leptos_options.clone());

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|error| Error::Bind { error, addr })?;
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(Error::Serve)
}
