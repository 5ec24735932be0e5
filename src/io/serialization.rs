// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project export and import.
//!
//! A single project can be exported to, and imported from, YAML or JSON.
//! The format is chosen by file extension.

use crate::models::project::Project;
use anyhow::{bail, Result};
use std::path::Path;

/// File formats a project can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Yaml,
    Json,
}

impl ExportFormat {
    /// Format implied by a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(ExportFormat::Yaml),
            Some("json") => Ok(ExportFormat::Json),
            other => bail!("Unsupported file extension: {:?}", other),
        }
    }
}

/// Export a project to YAML format.
pub fn export_yaml(project: &Project, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(project)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a project to JSON format.
pub fn export_json(project: &Project, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(project)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import a project from YAML format.
pub fn import_yaml(path: &Path) -> Result<Project> {
    let yaml = std::fs::read_to_string(path)?;
    let project = serde_yaml::from_str(&yaml)?;
    Ok(project)
}

/// Import a project from JSON format.
pub fn import_json(path: &Path) -> Result<Project> {
    let json = std::fs::read_to_string(path)?;
    let project = serde_json::from_str(&json)?;
    Ok(project)
}

/// Export in the format implied by the extension.
pub fn export_project(project: &Project, path: &Path) -> Result<()> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Yaml => export_yaml(project, path),
        ExportFormat::Json => export_json(project, path),
    }
}

/// Import in the format implied by the extension.
pub fn import_project(path: &Path) -> Result<Project> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Yaml => import_yaml(path),
        ExportFormat::Json => import_json(path),
    }
}
