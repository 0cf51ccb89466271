// Library crate for the API console
// Exports modules for use by the server binary and tests

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    create_api, get_breadcrumb, get_menu, get_section, list_apis, list_notifications,
    publish_api, update_api, view_api,
};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Hello, API Console!" }))
        // API definition routes
        .route("/api/apis", get(list_apis).post(create_api))
        .route("/api/apis/{id}", get(view_api).put(update_api))
        .route("/api/apis/{id}/publish", post(publish_api))
        // Console navigation routes
        .route("/api/console/menu", get(get_menu))
        .route("/api/console/breadcrumb", get(get_breadcrumb))
        .route("/api/console/sections/{key}", get(get_section))
        // Notification routes
        .route("/api/notifications", get(list_notifications))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
