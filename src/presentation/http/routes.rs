//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::auth_middleware;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/admin", admin_routes(state.clone()))
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Admin routes. Everything except login requires a token.
fn admin_routes(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/employee/login", post(handlers::employee::login));

    let protected = Router::new()
        .route(
            "/employee",
            post(handlers::employee::save).put(handlers::employee::update),
        )
        .route("/employee/logout", post(handlers::employee::logout))
        .route("/employee/page", get(handlers::employee::page))
        .route(
            "/employee/status/{status}",
            post(handlers::employee::start_or_stop),
        )
        .route("/employee/{id}", get(handlers::employee::get_by_id))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
