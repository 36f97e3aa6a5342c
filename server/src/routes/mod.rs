//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API, static icon files and the Leptos SSR
//! landing page under a single Axum router. Every SSR render receives the
//! current `PortalContext` through Leptos context.
//!
//! Trailing slashes are trimmed before routing, so `/{tenant}/` (the URL the
//! gateway links to) renders the same page as `/{tenant}`.

pub mod services;

use std::path::PathBuf;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API and health routes.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/services", get(services::list_services))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full portal service: API routes + icons + Leptos SSR landing page.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn leptos_app(state: AppState) -> Result<PortalService, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = state.clone();
                move || provide_context(state.portal_context())
            },
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let icons_dir = state.config.icons_dir.clone();

    let router = api_routes(state)
        .nest_service("/icons", ServeDir::new(icons_dir))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    Ok(NormalizePath::trim_trailing_slash(router))
}

/// Service type handed to `axum::serve`.
pub type PortalService = NormalizePath<Router>;

/// Wrap the portal service for `axum::serve`.
pub fn into_make_service(app: PortalService) -> axum::routing::IntoMakeService<PortalService> {
    axum::ServiceExt::<Request>::into_make_service(app)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
