//! API routes definition

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the API router with all endpoints
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/participants",
            post(handlers::register_participant).get(handlers::list_participants),
        )
        .route(
            "/messages",
            post(handlers::post_message).get(handlers::list_messages),
        )
        .route("/status", post(handlers::heartbeat))
        .with_state(state)
}
