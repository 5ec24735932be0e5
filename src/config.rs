// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Startup configuration.

use std::path::PathBuf;

/// Environment variable overriding the project store location.
pub const DATA_FILE_ENV: &str = "MINDLIST_DATA_FILE";

const DATA_DIR_NAME: &str = "mindlist";
const DATA_FILE_NAME: &str = "projects.json";
const FALLBACK_DATA_FILE: &str = "mindlist_projects.json";

/// Application settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the project collection is stored.
    pub data_file: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub title: String,
}

impl AppConfig {
    /// Resolve settings from the environment and platform directories.
    pub fn from_env() -> Self {
        let data_file = resolve_data_file(std::env::var(DATA_FILE_ENV).ok(), dirs::data_dir());
        Self {
            data_file,
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(FALLBACK_DATA_FILE),
            window_size: [1280.0, 800.0],
            min_window_size: [900.0, 600.0],
            title: "MindList - Study Workspace".to_string(),
        }
    }
}

/// Store location: explicit override, then the platform data directory,
/// then the working directory.
pub fn resolve_data_file(override_path: Option<String>, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    match data_dir {
        Some(dir) => dir.join(DATA_DIR_NAME).join(DATA_FILE_NAME),
        None => PathBuf::from(FALLBACK_DATA_FILE),
    }
}
