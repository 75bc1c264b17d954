// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image upload + detection endpoint

pub mod aggregate;
pub mod handler;
pub mod response;

pub use aggregate::aggregate_detections;
pub use handler::upload_handler;
pub use response::{DetectResponse, DetectionInfo};
