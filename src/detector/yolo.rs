// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! YOLOv8 ONNX detector
//!
//! Wraps an ONNX Runtime session around a YOLOv8-format detection model.
//! The session is created once and shared behind a mutex (ort sessions need
//! `&mut` to run); everything else is immutable after load.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use image::DynamicImage;
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use regex::Regex;
use tracing::{info, warn};

use super::postprocessing::postprocess_output;
use super::preprocessing::preprocess_image;
use super::{Detection, DetectorError, ObjectDetector};

/// Detector configuration
#[derive(Debug, Clone)]
pub struct YoloConfig {
    /// Path to the ONNX model file
    pub model_path: PathBuf,
    /// Square model input size in pixels
    pub input_size: u32,
    /// Minimum class confidence for a box to be kept
    pub confidence_threshold: f32,
    /// IoU threshold for per-class NMS
    pub iou_threshold: f32,
}

impl Default for YoloConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("./models/best.onnx"),
            input_size: 640,
            confidence_threshold: 0.25,
            iou_threshold: 0.45,
        }
    }
}

/// Pretrained YOLOv8 detection model
pub struct YoloDetector {
    session: Mutex<Session>,
    names: HashMap<u32, String>,
    config: YoloConfig,
}

impl std::fmt::Debug for YoloDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoloDetector")
            .field("model_path", &self.config.model_path)
            .field("input_size", &self.config.input_size)
            .field("classes", &self.names.len())
            .finish_non_exhaustive()
    }
}

impl YoloDetector {
    /// Loads the ONNX model from disk. Called once at process startup.
    pub fn load(config: YoloConfig) -> Result<Self, DetectorError> {
        if !config.model_path.exists() {
            return Err(DetectorError::ModelLoad(format!(
                "model file not found: {}",
                config.model_path.display()
            )));
        }

        let session = build_session(&config.model_path)
            .map_err(|e| DetectorError::ModelLoad(e.to_string()))?;

        let names = class_names_from_session(&session);
        if names.is_empty() {
            warn!("Model carries no class name table, falling back to synthesized names");
        }

        info!(
            "YOLOv8 model loaded from {} ({} named classes)",
            config.model_path.display(),
            names.len()
        );

        Ok(Self {
            session: Mutex::new(session),
            names,
            config,
        })
    }

    /// The model's id -> name table
    pub fn class_names(&self) -> &HashMap<u32, String> {
        &self.names
    }
}

impl ObjectDetector for YoloDetector {
    fn detect(&self, image: &DynamicImage) -> Result<Vec<Detection>, DetectorError> {
        let (input, letterbox) = preprocess_image(image, self.config.input_size)?;
        let input_value =
            Value::from_array(input).map_err(|e| DetectorError::Inference(e.to_string()))?;

        let output = {
            let mut session = self.session.lock().unwrap();
            let outputs = session
                .run(ort::inputs!["images" => input_value])
                .map_err(|e| DetectorError::Inference(e.to_string()))?;
            outputs[0]
                .try_extract_array::<f32>()
                .map_err(|e| DetectorError::BadOutput(e.to_string()))?
                .to_owned()
        };

        postprocess_output(
            &output,
            &self.names,
            self.config.confidence_threshold,
            self.config.iou_threshold,
            &letterbox,
        )
    }
}

fn build_session(model_path: &Path) -> ort::Result<Session> {
    Session::builder()?
        .with_execution_providers([CPUExecutionProvider::default().build()])?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(4)?
        .commit_from_file(model_path)
}

/// Reads the class name table from the model's custom metadata.
///
/// ultralytics exports embed a `names` key holding a python-dict literal like
/// `{0: 'virus_kuning', 1: 'thrips'}`. Missing or unparsable metadata yields
/// an empty table rather than a load failure.
fn class_names_from_session(session: &Session) -> HashMap<u32, String> {
    let raw = match session.metadata().and_then(|m| m.custom("names")) {
        Ok(Some(raw)) => raw,
        Ok(None) => return HashMap::new(),
        Err(e) => {
            warn!("Failed to read model metadata: {}", e);
            return HashMap::new();
        }
    };

    parse_class_names(&raw)
}

fn parse_class_names(raw: &str) -> HashMap<u32, String> {
    let re = match Regex::new(r#"(\d+)\s*:\s*['"]([^'"]*)['"]"#) {
        Ok(re) => re,
        Err(_) => return HashMap::new(),
    };

    re.captures_iter(raw)
        .filter_map(|caps| {
            let id = caps[1].parse::<u32>().ok()?;
            Some((id, caps[2].to_string()))
        })
        .collect()
}
