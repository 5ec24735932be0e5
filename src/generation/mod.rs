// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Content generation service boundary.
//!
//! The workspace asks a `ContentGenerator` for mind maps, study notes and
//! media. Calls are blocking and are always made from worker threads.

pub mod layout;
pub mod offline;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One concept as returned by the generation service, before layout.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedConcept {
    #[serde(default)]
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub children: Vec<String>,
}

/// Generated study notes and video script for one concept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeContent {
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub script: String,
}

/// An external service that produces study material.
///
/// Empty locators from the image and video operations mean that nothing
/// was produced.
pub trait ContentGenerator: Send + Sync {
    /// Concepts for a topic. The first concept is the root.
    fn generate_mind_map(&self, topic: &str) -> Result<Vec<GeneratedConcept>>;

    fn generate_node_content(&self, label: &str, description: &str) -> Result<NodeContent>;

    /// Locator (URL or data URI) of a generated diagram.
    fn generate_node_image(&self, label: &str, description: &str) -> Result<String>;

    /// Locator of a generated video. May take a long time.
    fn generate_node_video(&self, label: &str, description: &str) -> Result<String>;
}

#[derive(Deserialize)]
struct MindMapDocument {
    #[serde(default)]
    nodes: serde_json::Map<String, serde_json::Value>,
}

/// Parse a `{"nodes": {id: {...}}}` mind-map document, keeping the
/// document's key order. Each concept takes its key as id.
pub fn parse_mind_map(json: &str) -> Result<Vec<GeneratedConcept>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document: MindMapDocument =
        serde_json::from_str(json).context("Invalid mind map document")?;

    document
        .nodes
        .into_iter()
        .map(|(key, value)| {
            let mut concept: GeneratedConcept = serde_json::from_value(value)
                .with_context(|| format!("Invalid concept '{}'", key))?;
            concept.id = key;
            Ok(concept)
        })
        .collect()
}
