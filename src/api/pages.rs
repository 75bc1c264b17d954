// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fixed-page apps
//!
//! Two standalone minimal apps (landing and intro) plus the upload-form page
//! used by the detection app. All pages are fixed templates embedded at
//! compile time; unknown paths get axum's default 404.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

const INDEX_HTML: &str = include_str!("../../templates/index.html");
const INTRO_HTML: &str = include_str!("../../templates/intro.html");
const UPLOAD_HTML: &str = include_str!("../../templates/upload.html");

/// Landing app: `GET /` and `GET /index`
pub fn landing_app() -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/index", get(index_page))
}

/// Intro app: `GET /intro`
pub fn intro_app() -> Router {
    Router::new().route("/intro", get(intro_page))
}

async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn intro_page() -> Html<&'static str> {
    Html(INTRO_HTML)
}

/// Upload form page for the detection app (`GET /upload`)
pub async fn upload_page() -> Html<&'static str> {
    Html(UPLOAD_HTML)
}
