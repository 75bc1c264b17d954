// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image decoding for the upload pipeline
//!
//! Uploads arrive as raw multipart bytes; this module turns them into a
//! `DynamicImage` or a reportable decode error.

pub mod image_utils;

pub use image_utils::{decode_image_bytes, detect_format, ImageError, ImageInfo};
