// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod detect;
pub mod errors;
pub mod http_server;
pub mod pages;

pub use detect::{upload_handler, DetectResponse, DetectionInfo};
pub use errors::ApiError;
pub use http_server::{detect_app, serve, AppState};
pub use pages::{intro_app, landing_app};
