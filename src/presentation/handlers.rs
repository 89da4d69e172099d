// HTTP request handlers
use crate::domain::render_config::RenderConfig;
use crate::domain::table::Table;
use crate::domain::video::VideoBatch;
use crate::infrastructure::http_response::{accepts_brotli, json_response, json_response_with_status};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub table: Table,
    #[serde(default)]
    pub config: RenderConfig,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn into_response(result: Result<Response, StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the template catalog
pub async fn list_templates(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let templates = state.template_service.list_templates();
    into_response(json_response(&templates, accepts_brotli(&headers)).await)
}

/// Fetch one template; unknown ids resolve to the default template
pub async fn get_template(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let template = state.template_service.get_template(&id);
    into_response(json_response(template, accepts_brotli(&headers)).await)
}

/// Generate the video batch for an uploaded table
pub async fn generate_videos(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!("Rejected malformed generation request: {}", rejection.body_text());
            let body = ErrorBody {
                error: rejection.body_text(),
            };
            return into_response(json_response_with_status(rejection.status(), &body, compress).await);
        }
    };

    let validation = request
        .table
        .validate()
        .map_err(|e| e.to_string())
        .and_then(|_| request.config.validate().map_err(|e| e.to_string()));

    if let Err(message) = validation {
        tracing::warn!("Rejected generation request for {}: {}", request.table.file_name, message);
        let body = ErrorBody { error: message };
        return into_response(json_response_with_status(StatusCode::BAD_REQUEST, &body, compress).await);
    }

    let videos = state
        .video_service
        .generate_videos(&request.table, &request.config);
    let batch = VideoBatch::new(request.table.file_name, videos);

    into_response(json_response(&batch, compress).await)
}
