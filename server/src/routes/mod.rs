//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Every SSR request receives the preference
//! policy as context so the shell can seed the document root from cookies.

pub mod admin;
pub mod content;
pub mod github;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use client::state::preferences::RenderPolicy;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/blogs/published", get(content::published_blogs))
        .route("/api/blogs/sitemap", get(content::sitemap))
        .route("/api/blogs/{slug}", get(content::blog))
        .route("/api/blogs/{slug}/view", post(content::record_view))
        .route("/api/projects", get(content::projects))
        .route("/api/resume", get(content::resume))
        .route("/api/users/{id}", get(content::user))
        .route("/api/admin/blogs", get(admin::list_blogs))
        .route("/api/admin/blogs/{id}", put(admin::put_blog).delete(admin::delete_blog))
        .route("/api/admin/projects/{id}", put(admin::put_project).delete(admin::delete_project))
        .route("/api/admin/resume/{id}", put(admin::put_resume).delete(admin::delete_resume))
        .route("/api/translate", post(admin::translate))
        .route("/api/github/{owner}/{repo}/file", get(github::file))
        .route("/api/github/{owner}/{repo}/dir", get(github::dir))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let policy = RenderPolicy { precedence: state.config.precedence, secure_cookies: state.config.cookie_secure };

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(policy),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
