// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::template_service::TemplateService;
use crate::application::video_service::VideoService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::template_sources::source_from_settings;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Load the template catalog once; lookups never fail afterwards
    let template_source = source_from_settings(&app_config.templates)?;
    let template_service = TemplateService::load(template_source.as_ref()).await;

    // Create services (application layer)
    let video_service = VideoService::new(template_service.catalog());

    // Create application state
    let state = Arc::new(AppState {
        template_service,
        video_service,
    });

    // Build router (presentation layer)
    let router = build_router(state, app_config.server.max_body_bytes);

    // Start server
    let addr: SocketAddr = app_config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", app_config.server.bind_address))?;
    tracing::info!("Starting chart-video-generator on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
