//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check, Leptos SSR rendering of the
//! landing and tracking pages, and the compiled WASM/CSS assets under a
//! single Axum router. Auth endpoints are owned by the external session
//! provider and are not routed here.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};

/// Routes that do not go through Leptos.
fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: service routes + Leptos SSR + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ConfigError> {
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(govreport_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || govreport_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) live under the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(TraceLayer::new_for_http());

    if config.compression {
        return Ok(router.layer(CompressionLayer::new()));
    }
    Ok(router)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
