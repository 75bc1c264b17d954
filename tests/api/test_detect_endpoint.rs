// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for POST /upload on the detection app
//!
//! The detector is stubbed so these exercise the HTTP contract: the multipart
//! field handling, error payloads, aggregation, and response shape.

use axum::http::StatusCode;
use tower::ServiceExt;

use super::support::*;

#[tokio::test]
async fn test_missing_image_field_returns_400() {
    let app = app_with_detections(vec![]);

    // Multipart form with a wrongly named field
    let response = app.oneshot(multipart_upload("file", TINY_PNG)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No image file provided");
}

#[tokio::test]
async fn test_zero_detections_returns_empty_list() {
    let app = app_with_detections(vec![]);

    let response = app
        .oneshot(multipart_upload("image", TINY_PNG))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "detections": [] }));
}

#[tokio::test]
async fn test_duplicate_classes_first_occurrence_wins() {
    // thrips 0.9 precedes thrips 0.99: the response must keep 0.9
    let app = app_with_detections(vec![
        detection("thrips", 0.9, [10.0, 10.0, 50.0, 50.0]),
        detection("thrips", 0.99, [200.0, 200.0, 250.0, 250.0]),
        detection("sehat", 0.8, [0.0, 0.0, 640.0, 640.0]),
    ]);

    let response = app
        .oneshot(multipart_upload("image", TINY_PNG))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let detections = body["detections"].as_array().unwrap();

    assert_eq!(detections.len(), 2);
    assert_eq!(detections[0]["class"], "thrips");
    assert!((detections[0]["confidence"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    assert_eq!(detections[1]["class"], "sehat");
}

#[tokio::test]
async fn test_known_class_carries_advisory_text() {
    let app = app_with_detections(vec![detection("virus_kuning", 0.7, [5.0, 5.0, 80.0, 90.0])]);

    let response = app
        .oneshot(multipart_upload("image", TINY_PNG))
        .await
        .unwrap();

    let body = body_json(response).await;
    let entry = &body["detections"][0];
    assert!(entry["message"].as_str().unwrap().starts_with("Virus kuning"));
    assert!(entry["medicine"]
        .as_str()
        .unwrap()
        .starts_with("Penanggulangan virus kuning"));
}

#[tokio::test]
async fn test_unknown_class_gets_placeholder_text() {
    let app = app_with_detections(vec![detection("Class 7", 0.6, [1.0, 2.0, 3.0, 4.0])]);

    let response = app
        .oneshot(multipart_upload("image", TINY_PNG))
        .await
        .unwrap();

    let body = body_json(response).await;
    let entry = &body["detections"][0];
    let placeholder = "Informasi tidak tersedia untuk penyakit ini.";
    assert_eq!(entry["message"], placeholder);
    assert_eq!(entry["medicine"], placeholder);
}

#[tokio::test]
async fn test_bounding_box_passes_through_unmodified() {
    // Out-of-image and fractional coordinates come back exactly as produced
    let app = app_with_detections(vec![detection("thrips", 0.5, [-3.5, 0.25, 99999.0, 0.001])]);

    let response = app
        .oneshot(multipart_upload("image", TINY_PNG))
        .await
        .unwrap();

    let body = body_json(response).await;
    let bbox = body["detections"][0]["box"].as_array().unwrap();
    assert_eq!(bbox.len(), 4);
    assert!((bbox[0].as_f64().unwrap() + 3.5).abs() < 1e-6);
    assert!((bbox[1].as_f64().unwrap() - 0.25).abs() < 1e-6);
    assert!((bbox[2].as_f64().unwrap() - 99999.0).abs() < 1e-3);
    assert!((bbox[3].as_f64().unwrap() - 0.001).abs() < 1e-6);
}

#[tokio::test]
async fn test_undecodable_image_returns_400() {
    let app = app_with_detections(vec![]);

    let response = app
        .oneshot(multipart_upload("image", b"definitely not an image"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Invalid image"));
}

#[tokio::test]
async fn test_detector_failure_returns_500() {
    let app = app_with_failing_detector();

    let response = app
        .oneshot(multipart_upload("image", TINY_PNG))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Detection failed"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with_detections(vec![]);

    let request = axum::http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
