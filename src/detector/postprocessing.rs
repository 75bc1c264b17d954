// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! YOLOv8 output decoding and non-maximum suppression

use std::collections::HashMap;

use ndarray::Array;

use super::detection::Detection;
use super::preprocessing::Letterbox;
use super::DetectorError;

/// Human-readable name for a class id, synthesized when the model's name
/// table has no entry.
pub fn class_name(names: &HashMap<u32, String>, class_id: u32) -> String {
    names
        .get(&class_id)
        .cloned()
        .unwrap_or_else(|| format!("Class {}", class_id))
}

/// Per-class non-maximum suppression
pub fn nms(detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    if detections.is_empty() {
        return detections;
    }

    // Group detections by class_id
    let mut class_groups: HashMap<u32, Vec<Detection>> = HashMap::new();
    for detection in detections {
        class_groups
            .entry(detection.class_id)
            .or_default()
            .push(detection);
    }

    let mut all_results = Vec::new();

    // Apply NMS separately to each class
    for (_, mut class_detections) in class_groups {
        class_detections.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut suppressed = vec![false; class_detections.len()];

        for i in 0..class_detections.len() {
            if suppressed[i] {
                continue;
            }

            // Suppress overlapping detections within the same class
            for j in (i + 1)..class_detections.len() {
                if !suppressed[j] && class_detections[i].iou(&class_detections[j]) > iou_threshold {
                    suppressed[j] = true;
                }
            }

            all_results.push(class_detections[i].clone());
        }
    }

    all_results
}

/// Decodes a raw YOLOv8 output tensor of shape `[1, 4 + num_classes, boxes]`
/// into detections in original-image pixel coordinates.
///
/// Boxes at or below `confidence_threshold` are dropped, per-class NMS is
/// applied, and the survivors are sorted by confidence descending.
pub fn postprocess_output(
    output: &Array<f32, ndarray::IxDyn>,
    names: &HashMap<u32, String>,
    confidence_threshold: f32,
    iou_threshold: f32,
    letterbox: &Letterbox,
) -> Result<Vec<Detection>, DetectorError> {
    let shape = output.shape();
    if shape.len() != 3 {
        return Err(DetectorError::BadOutput(format!(
            "expected 3D output, got {}D",
            shape.len()
        )));
    }
    if shape[1] < 5 {
        return Err(DetectorError::BadOutput(format!(
            "expected [1, 4 + classes, boxes] output, got {:?}",
            shape
        )));
    }

    let num_classes = shape[1] - 4;
    let num_boxes = shape[2];
    let mut detections = Vec::new();

    for i in 0..num_boxes {
        // Box coordinates come first: center x/y, width, height
        let x_center = output[[0, 0, i]];
        let y_center = output[[0, 1, i]];
        let width = output[[0, 2, i]];
        let height = output[[0, 3, i]];

        // Find the class with highest confidence
        let mut max_confidence = 0.0;
        let mut best_class_id = 0u32;
        for class_idx in 0..num_classes {
            let class_confidence = output[[0, 4 + class_idx, i]];
            if class_confidence > max_confidence {
                max_confidence = class_confidence;
                best_class_id = class_idx as u32;
            }
        }

        if max_confidence > confidence_threshold {
            // Corner coordinates in model space, then back to image pixels
            let (x1, y1) =
                letterbox.to_image_coords(x_center - width / 2.0, y_center - height / 2.0);
            let (x2, y2) =
                letterbox.to_image_coords(x_center + width / 2.0, y_center + height / 2.0);

            detections.push(Detection {
                x1,
                y1,
                x2,
                y2,
                confidence: max_confidence,
                class_id: best_class_id,
                class_name: class_name(names, best_class_id),
            });
        }
    }

    let mut detections = nms(detections, iou_threshold);
    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(detections)
}
