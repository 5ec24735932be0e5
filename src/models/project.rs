// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project state management.
//!
//! A project is one saved study workspace: its concept nodes, the drawings
//! made on top of them and any attached resources. Projects are treated as
//! values: every change produces a new `Project` which replaces the old one
//! in the store.

use super::drawing::DrawingElement;
use super::node::{ConceptNode, NodeAsset, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type of an attached study resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Doc,
    Ppt,
    Image,
    Video,
    Link,
}

/// A file or link attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A saved study workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    pub nodes: BTreeMap<NodeId, ConceptNode>,
    /// Drawings in commit order, which is also paint order.
    #[serde(rename = "drawingElements", default)]
    pub drawing_elements: Vec<DrawingElement>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Project {
    /// Create a new project with a fresh id, stamped with the current time.
    pub fn new(title: String, nodes: BTreeMap<NodeId, ConceptNode>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            created_at: chrono::Utc::now().timestamp_millis(),
            nodes,
            drawing_elements: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&ConceptNode> {
        self.nodes.get(id)
    }

    /// Creation date formatted for display.
    pub fn created_label(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from_timestamp_millis(self.created_at)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "unknown date".to_string())
    }

    /// Copy of this project with `element` appended to the drawings.
    pub fn with_drawing(&self, element: DrawingElement) -> Project {
        let mut next = self.clone();
        next.drawing_elements.push(element);
        next
    }

    /// Copy of this project with non-empty `notes`/`script` merged into a node.
    ///
    /// Returns `None` when the node does not exist or nothing would change.
    pub fn with_node_content(&self, node_id: &str, notes: &str, script: &str) -> Option<Project> {
        if notes.is_empty() && script.is_empty() {
            return None;
        }
        let mut next = self.clone();
        let node = next.nodes.get_mut(node_id)?;
        if !notes.is_empty() {
            node.notes = Some(notes.to_string());
        }
        if !script.is_empty() {
            node.script = Some(script.to_string());
        }
        Some(next)
    }

    /// Copy of this project with `asset` appended to a node.
    ///
    /// Returns `None` when the node does not exist.
    pub fn with_node_asset(&self, node_id: &str, asset: NodeAsset) -> Option<Project> {
        let mut next = self.clone();
        next.nodes.get_mut(node_id)?.assets.push(asset);
        Some(next)
    }
}
