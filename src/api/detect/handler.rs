// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload endpoint handler

use axum::extract::State;
use axum::Json;
use axum_extra::extract::Multipart;
use tracing::{debug, info, warn};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vision::decode_image_bytes;

use super::aggregate::aggregate_detections;
use super::response::DetectResponse;

/// POST /upload - Run object detection on an uploaded image
///
/// Accepts a multipart form with a single file field named `image` and
/// returns one aggregated entry per detected class, with advisory text.
///
/// # Errors
/// - 400 Bad Request: `image` field missing, or bytes are not a decodable image
/// - 500 Internal Server Error: detection failed
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DetectResponse>, ApiError> {
    // 1. Pull the `image` file field out of the form
    let mut image_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidImage(e.to_string()))?
    {
        if field.name() == Some("image") {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::InvalidImage(e.to_string()))?;
            image_bytes = Some(data.to_vec());
            break;
        }
    }

    let image_bytes = image_bytes.ok_or(ApiError::MissingImage)?;

    // 2. Decode the upload into an RGB bitmap
    let (image, image_info) = decode_image_bytes(&image_bytes).map_err(|e| {
        warn!("Failed to decode uploaded image: {}", e);
        ApiError::InvalidImage(e.to_string())
    })?;

    debug!(
        "Decoded upload: {}x{}, {} bytes",
        image_info.width, image_info.height, image_info.size_bytes
    );

    // 3. Run the detector
    let detections = state.detector.detect(&image).map_err(|e| {
        warn!("Detection failed: {}", e);
        ApiError::DetectionFailed(e.to_string())
    })?;

    // 4. One entry per class, first occurrence wins
    let aggregated = aggregate_detections(&detections);

    info!(
        "Detection complete: {} raw boxes, {} distinct classes",
        detections.len(),
        aggregated.len()
    );

    Ok(Json(DetectResponse {
        detections: aggregated,
    }))
}
