// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Letterbox preprocessing for YOLOv8 input tensors

use image::DynamicImage;
use ndarray::Array;

use super::DetectorError;

/// Scale and padding applied while letterboxing, needed to map model-space
/// boxes back to original-image pixels.
#[derive(Debug, Clone, Copy)]
pub struct Letterbox {
    pub scale: f32,
    pub pad_x: f32,
    pub pad_y: f32,
}

impl Letterbox {
    /// Maps a model-space coordinate pair back to original-image pixels.
    pub fn to_image_coords(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.pad_x) / self.scale, (y - self.pad_y) / self.scale)
    }
}

/// Converts an image into a normalized NCHW `[1, 3, size, size]` tensor.
///
/// The image is scaled to fit the square model input with aspect ratio
/// preserved, centered on gray (114, 114, 114) padding, and normalized to
/// `[0, 1]`.
pub fn preprocess_image(
    img: &DynamicImage,
    target_size: u32,
) -> Result<(Array<f32, ndarray::IxDyn>, Letterbox), DetectorError> {
    // Convert to RGB if needed
    let rgb_img = img.to_rgb8();
    let (orig_width, orig_height) = rgb_img.dimensions();

    let max_dim = orig_width.max(orig_height);
    let scale = (target_size as f32) / (max_dim as f32);
    let new_width = ((orig_width as f32 * scale) as u32).max(1);
    let new_height = ((orig_height as f32 * scale) as u32).max(1);

    let resized = image::imageops::resize(
        &rgb_img,
        new_width,
        new_height,
        image::imageops::FilterType::Triangle,
    );

    // Letterbox with gray padding, resized image centered
    let mut letterboxed = image::RgbImage::new(target_size, target_size);
    for pixel in letterboxed.pixels_mut() {
        *pixel = image::Rgb([114, 114, 114]);
    }

    let x_offset = (target_size - new_width) / 2;
    let y_offset = (target_size - new_height) / 2;

    for y in 0..new_height {
        for x in 0..new_width {
            let src_pixel = resized.get_pixel(x, y);
            letterboxed.put_pixel(x + x_offset, y + y_offset, *src_pixel);
        }
    }

    // NCHW order: batch, channel, height, width
    let mut input_data = Vec::with_capacity((3 * target_size * target_size) as usize);
    for c in 0..3 {
        for y in 0..target_size {
            for x in 0..target_size {
                let pixel = letterboxed.get_pixel(x, y);
                input_data.push(pixel[c] as f32 / 255.0);
            }
        }
    }

    let input = Array::from_shape_vec(
        ndarray::IxDyn(&[1, 3, target_size as usize, target_size as usize]),
        input_data,
    )
    .map_err(|e| DetectorError::Inference(e.to_string()))?;

    let letterbox = Letterbox {
        scale,
        pad_x: x_offset as f32,
        pad_y: y_offset as f32,
    };

    Ok((input, letterbox))
}
