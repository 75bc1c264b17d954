// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration from CLI flags and environment variables

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::detector::YoloConfig;

/// Chili plant disease detection node
#[derive(Debug, Clone, Parser)]
#[command(name = "chili-detect-node", version)]
pub struct NodeArgs {
    /// Path to the pretrained YOLOv8 ONNX model
    #[arg(long, env = "MODEL_PATH", default_value = "./models/best.onnx")]
    pub model_path: PathBuf,

    /// Listen address for the detection app
    #[arg(long, env = "DETECT_ADDR", default_value = "127.0.0.1:8080")]
    pub detect_addr: SocketAddr,

    /// Listen address for the landing page app
    #[arg(long, env = "LANDING_ADDR", default_value = "127.0.0.1:8081")]
    pub landing_addr: SocketAddr,

    /// Listen address for the intro page app
    #[arg(long, env = "INTRO_ADDR", default_value = "127.0.0.1:8082")]
    pub intro_addr: SocketAddr,

    /// Minimum class confidence for a detection to be kept
    #[arg(long, env = "CONFIDENCE_THRESHOLD", default_value_t = 0.25)]
    pub confidence_threshold: f32,

    /// IoU threshold for non-maximum suppression
    #[arg(long, env = "IOU_THRESHOLD", default_value_t = 0.45)]
    pub iou_threshold: f32,

    /// Square model input size in pixels
    #[arg(long, env = "INPUT_SIZE", default_value_t = 640)]
    pub input_size: u32,
}

impl NodeArgs {
    pub fn yolo_config(&self) -> YoloConfig {
        YoloConfig {
            model_path: self.model_path.clone(),
            input_size: self.input_size,
            confidence_threshold: self.confidence_threshold,
            iou_threshold: self.iou_threshold,
        }
    }
}
