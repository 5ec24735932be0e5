// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! MindList - Study workspace
//!
//! A cross-platform desktop application that turns a study topic into a
//! mind map on an infinite canvas, where concepts can be annotated with
//! sketches and enriched with generated notes and media.

mod app;
mod ui;

use anyhow::Result;
use app::MindListApp;
use mindlist::config::AppConfig;
use mindlist::generation::offline::OfflineGenerator;
use mindlist::io::store::ProjectStore;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::from_env();
    let store = match ProjectStore::load(&config.data_file) {
        Ok(store) => store,
        Err(e) => {
            // Keep the unreadable file intact and run without persistence
            log::error!("Could not load saved projects: {:#}", e);
            ProjectStore::in_memory()
        }
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "MindList",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(MindListApp::new(
                config,
                store,
                Arc::new(OfflineGenerator::new()),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
