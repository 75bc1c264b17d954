// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// API-level errors for the detection endpoint
///
/// Every variant serializes to the wire contract `{"error": "<message>"}`
/// with the matching status code; requests fail atomically.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// No `image` field in the multipart form
    MissingImage,
    /// The uploaded bytes are not a decodable image
    InvalidImage(String),
    /// The detector adapter failed
    DetectionFailed(String),
    InternalError(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingImage | ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::DetectionFailed(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingImage => write!(f, "No image file provided"),
            ApiError::InvalidImage(msg) => write!(f, "Invalid image: {}", msg),
            ApiError::DetectionFailed(msg) => write!(f, "Detection failed: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = axum::response::Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
