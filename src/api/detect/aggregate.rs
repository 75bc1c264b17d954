// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Aggregation of raw detections into the response list

use std::collections::HashSet;

use crate::advisory;
use crate::detector::Detection;

use super::response::DetectionInfo;

/// Collapses raw detections to one entry per class name and attaches the
/// advisory text.
///
/// The FIRST occurrence of a class wins, regardless of confidence; later
/// duplicates are dropped. Output order is first-seen order.
pub fn aggregate_detections(detections: &[Detection]) -> Vec<DetectionInfo> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut aggregated = Vec::new();

    for detection in detections {
        if !seen.insert(detection.class_name.as_str()) {
            continue;
        }

        aggregated.push(DetectionInfo {
            class: detection.class_name.clone(),
            confidence: detection.confidence,
            bounding_box: detection.xyxy(),
            message: advisory::disease_message(&detection.class_name).to_string(),
            medicine: advisory::treatment_advice(&detection.class_name).to_string(),
        });
    }

    aggregated
}
