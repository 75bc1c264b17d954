// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::detector::ObjectDetector;
use crate::version;

use super::detect::upload_handler;
use super::pages;

/// Shared state for the detection app: the model handle, loaded once at
/// startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn ObjectDetector>,
}

impl AppState {
    pub fn new(detector: Arc<dyn ObjectDetector>) -> Self {
        Self { detector }
    }
}

/// Builds the detection app router.
///
/// `GET /upload` serves the upload form, `POST /upload` runs detection.
/// Cross-origin requests are allowed from anywhere.
pub fn detect_app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Upload form + detection endpoint
        .route("/upload", get(pages::upload_page).post(upload_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves `app` until the process exits.
pub async fn serve(addr: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    axum::response::Json(json!({
        "status": "ok",
        "version": version::VERSION,
    }))
}
