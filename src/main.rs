// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use chili_detect_node::{
    api::{self, AppState},
    config::NodeArgs,
    detector::YoloDetector,
    version,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = NodeArgs::parse();

    tracing::info!("Starting chili-detect-node {}", version::VERSION);

    // Load the detection model once; it is shared read-only across requests
    tracing::info!("Loading model from {}", args.model_path.display());
    let detector = YoloDetector::load(args.yolo_config())?;
    let state = AppState::new(Arc::new(detector));

    // Three apps: detection (with CORS), landing pages, intro page
    tokio::try_join!(
        api::serve(args.detect_addr, api::detect_app(state)),
        api::serve(args.landing_addr, api::landing_app()),
        api::serve(args.intro_addr, api::intro_app()),
    )?;

    Ok(())
}
