// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Object detection via a pretrained YOLOv8 ONNX model
//!
//! The model is loaded once at startup and shared read-only across requests.
//! Handlers talk to it through the `ObjectDetector` trait so tests can swap
//! in a stub.

pub mod detection;
pub mod postprocessing;
pub mod preprocessing;
pub mod yolo;

pub use detection::Detection;
pub use yolo::{YoloConfig, YoloDetector};

use image::DynamicImage;
use thiserror::Error;

/// Errors surfaced by the detector adapter
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Unexpected model output: {0}")]
    BadOutput(String),
}

/// A pretrained object-detection model behind a uniform interface
pub trait ObjectDetector: Send + Sync {
    /// Runs detection on a decoded image and returns raw detections in
    /// model output order (boxes in original-image pixel coordinates).
    fn detect(&self, image: &DynamicImage) -> Result<Vec<Detection>, DetectorError>;
}
