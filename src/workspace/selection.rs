// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Node selection and the inspector read model.

use crate::models::node::{ConceptNode, NodeAsset, NodeId};
use crate::models::project::Project;

/// At most one selected concept node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select a node, replacing any previous selection.
    pub fn select(&mut self, id: NodeId) {
        if self.selected.as_ref() != Some(&id) {
            log::info!("Selected node {}", id);
        }
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Inspector view of the selected node, if it still exists.
    pub fn inspect<'a>(&self, project: &'a Project) -> Option<Inspector<'a>> {
        let id = self.selected.as_deref()?;
        project.node(id).map(|node| Inspector { node })
    }
}

/// Read-only view of the selected node's generated materials.
#[derive(Debug, Clone, Copy)]
pub struct Inspector<'a> {
    node: &'a ConceptNode,
}

impl<'a> Inspector<'a> {
    pub fn node(&self) -> &'a ConceptNode {
        self.node
    }

    pub fn notes(&self) -> Option<&'a str> {
        self.node.notes.as_deref().filter(|notes| !notes.is_empty())
    }

    pub fn script(&self) -> Option<&'a str> {
        self.node.script.as_deref().filter(|script| !script.is_empty())
    }

    pub fn assets(&self) -> &'a [NodeAsset] {
        &self.node.assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn project() -> Project {
        let mut root = ConceptNode::new("root", "Photosynthesis", "Light to sugar");
        root.notes = Some("Chlorophyll absorbs light".to_string());
        root.script = Some(String::new());
        let mut nodes = BTreeMap::new();
        nodes.insert("root".to_string(), root);
        nodes.insert("a".to_string(), ConceptNode::new("a", "Calvin cycle", ""));
        Project::new("Plants".to_string(), nodes)
    }

    #[test]
    fn test_selection_replaces() {
        let mut selection = Selection::new();
        assert_eq!(selection.selected(), None);

        selection.select("root".to_string());
        selection.select("a".to_string());
        assert_eq!(selection.selected(), Some("a"));

        selection.clear();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_inspector_reads_selected_node() {
        let project = project();
        let mut selection = Selection::new();
        assert!(selection.inspect(&project).is_none());

        selection.select("root".to_string());
        let inspector = selection.inspect(&project).unwrap();
        assert_eq!(inspector.node().label, "Photosynthesis");
        assert_eq!(inspector.notes(), Some("Chlorophyll absorbs light"));
        assert_eq!(inspector.script(), None);
        assert!(inspector.assets().is_empty());
    }

    #[test]
    fn test_inspector_missing_node() {
        let mut selection = Selection::new();
        selection.select("gone".to_string());
        assert!(selection.inspect(&project()).is_none());
    }
}
