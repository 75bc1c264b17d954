// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection response types

use serde::{Deserialize, Serialize};

/// A detection enriched with advisory text, as sent to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionInfo {
    /// Class name (model-owned string, e.g. "thrips")
    pub class: String,
    /// Confidence score (0.0-1.0)
    pub confidence: f32,
    /// Bounding box `[x1, y1, x2, y2]` in pixel coordinates, passed through
    /// from the model unmodified
    #[serde(rename = "box")]
    pub bounding_box: [f32; 4],
    /// Disease description
    pub message: String,
    /// Treatment advice
    pub medicine: String,
}

/// Response from `POST /upload`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectResponse {
    pub detections: Vec<DetectionInfo>,
}
