// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mind-map concept data structures.
//!
//! A concept node carries its world position, the ids of its children and
//! everything that has been generated for it so far.

use super::drawing::Point;
use serde::{Deserialize, Serialize};

/// Identifier of a concept node, unique within its project.
pub type NodeId = String;

/// Type of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Video,
    Image,
    Infographic,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Video => "Video",
            AssetKind::Image => "Image",
            AssetKind::Infographic => "Infographic",
        }
    }
}

/// A generated artifact attached to a node. Never modified once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    /// URL or data URI.
    pub url: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl NodeAsset {
    /// Create an asset stamped with a fresh id and the current time.
    pub fn new(kind: AssetKind, url: String, prompt: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            url,
            timestamp: chrono::Utc::now().timestamp_millis(),
            prompt,
        }
    }
}

/// A single mind-map concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: NodeId,
    pub label: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
    /// Child ids. Not validated: unknown ids are skipped when rendering.
    #[serde(default)]
    pub children: Vec<NodeId>,
    #[serde(default)]
    pub assets: Vec<NodeAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl ConceptNode {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            x: 0.0,
            y: 0.0,
            children: Vec::new(),
            assets: Vec::new(),
            notes: None,
            script: None,
        }
    }

    /// World position of the node center.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Description cut to `max_chars` characters, with an ellipsis when cut.
    pub fn short_description(&self, max_chars: usize) -> String {
        if self.description.chars().count() <= max_chars {
            return self.description.clone();
        }
        let mut short: String = self.description.chars().take(max_chars).collect();
        short.push('…');
        short
    }
}
