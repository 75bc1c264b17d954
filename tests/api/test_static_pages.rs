// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for the fixed-page apps

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use chili_detect_node::api::{intro_app, landing_app};

use super::support::*;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_landing_app_root() {
    let response = landing_app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let body = body_string(response).await;
    assert!(body.contains("<html"));
}

#[tokio::test]
async fn test_landing_app_index_alias() {
    let app = landing_app();

    let root = app.clone().oneshot(get("/")).await.unwrap();
    let index = app.oneshot(get("/index")).await.unwrap();

    assert_eq!(root.status(), StatusCode::OK);
    assert_eq!(index.status(), StatusCode::OK);
    // Both routes serve the same page
    assert_eq!(body_string(root).await, body_string(index).await);
}

#[tokio::test]
async fn test_intro_app_page() {
    let response = intro_app().oneshot(get("/intro")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<html"));
    // HTML content, not a JSON body
    assert!(serde_json::from_str::<serde_json::Value>(&body).is_err());
}

#[tokio::test]
async fn test_detect_app_upload_form() {
    let app = app_with_detections(vec![]);

    let response = app.oneshot(get("/upload")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("image-upload-form"));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = landing_app().oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = intro_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
