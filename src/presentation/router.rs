// Route table shared by the server and its tests
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{generate_videos, get_template, health_check, list_templates};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/templates", get(list_templates))
        .route("/templates/:id", get(get_template))
        .route("/videos", post(generate_videos))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
