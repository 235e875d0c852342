//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health endpoint and stitches Leptos SSR rendering of the client
//! app under a single Axum router. Compiled WASM/CSS assets are served from
//! the Leptos site root under `/pkg`.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Debug, thiserror::Error)]
pub enum RoutesError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Routes that do not depend on Leptos configuration.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: health check + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section and no `LEPTOS_*` env).
pub fn app() -> Result<Router, RoutesError> {
    let conf = get_configuration(None).map_err(|e| RoutesError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(amt_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || amt_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page introuvable.")
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
