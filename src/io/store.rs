// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Persisted project collection.
//!
//! All projects live in one JSON file. The store replaces whole projects by
//! id and the application saves it after every change.

use crate::models::project::Project;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The saved projects, newest first.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    path: Option<PathBuf>,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the collection from `path`. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let projects = if path.exists() {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else {
            Vec::new()
        };

        log::info!("Loaded {} projects from {}", projects.len(), path.display());
        Ok(Self {
            path: Some(path.to_path_buf()),
            projects,
        })
    }

    /// Write the collection to its file, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.projects)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        log::debug!("Saved {} projects to {}", self.projects.len(), path.display());
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The `count` most recent projects.
    pub fn recent(&self, count: usize) -> &[Project] {
        &self.projects[..count.min(self.projects.len())]
    }

    /// Add a new project at the front.
    pub fn insert(&mut self, project: Project) {
        self.projects.insert(0, project);
    }

    /// Replace the project with the same id. Returns whether one matched.
    pub fn update_project(&mut self, next: Project) -> bool {
        match self.projects.iter_mut().find(|p| p.id == next.id) {
            Some(slot) => {
                *slot = next;
                true
            }
            None => false,
        }
    }

    /// Replace a project with the same id, or insert it at the front.
    pub fn upsert(&mut self, project: Project) {
        if let Some(slot) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project;
        } else {
            self.insert(project);
        }
    }
}
