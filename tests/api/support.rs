// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared helpers for API tests: a stub detector and multipart builders

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use chili_detect_node::api::{detect_app, AppState};
use chili_detect_node::detector::{Detection, DetectorError, ObjectDetector};
use image::DynamicImage;

// 1x1 red PNG - minimal valid image
pub const TINY_PNG: &[u8] = &[
    137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82, 0, 0, 0, 1, 0, 0, 0, 1, 8, 6,
    0, 0, 0, 31, 21, 196, 137, 0, 0, 0, 13, 73, 68, 65, 84, 120, 218, 99, 252, 207, 192, 240, 31,
    0, 5, 5, 2, 0, 95, 200, 241, 210, 0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130,
];

/// Stand-in for the model: returns canned detections, or fails on demand
pub struct StubDetector {
    pub detections: Vec<Detection>,
    pub fail: bool,
}

impl ObjectDetector for StubDetector {
    fn detect(&self, _image: &DynamicImage) -> Result<Vec<Detection>, DetectorError> {
        if self.fail {
            return Err(DetectorError::Inference("stub detector failure".to_string()));
        }
        Ok(self.detections.clone())
    }
}

/// Detection app wired to a stub returning the given detections
pub fn app_with_detections(detections: Vec<Detection>) -> Router {
    detect_app(AppState::new(Arc::new(StubDetector {
        detections,
        fail: false,
    })))
}

/// Detection app whose detector always fails
pub fn app_with_failing_detector() -> Router {
    detect_app(AppState::new(Arc::new(StubDetector {
        detections: vec![],
        fail: true,
    })))
}

pub fn detection(class_name: &str, confidence: f32, bounding_box: [f32; 4]) -> Detection {
    Detection {
        x1: bounding_box[0],
        y1: bounding_box[1],
        x2: bounding_box[2],
        y2: bounding_box[3],
        confidence,
        class_id: 0,
        class_name: class_name.to_string(),
    }
}

/// Builds a multipart POST /upload request with a single file field
pub fn multipart_upload(field_name: &str, bytes: &[u8]) -> Request<Body> {
    const BOUNDARY: &str = "chili-detect-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"leaf.png\"\r\n",
            field_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Reads a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Reads a response body as a string
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
