// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod advisory;
pub mod api;
pub mod config;
pub mod detector;
pub mod version;
pub mod vision;

// Re-export main types
pub use api::{ApiError, AppState, DetectResponse, DetectionInfo};
pub use config::NodeArgs;
pub use detector::{Detection, DetectorError, ObjectDetector, YoloConfig, YoloDetector};
