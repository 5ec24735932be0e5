// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Initial radial placement of generated concepts.

use super::GeneratedConcept;
use crate::models::drawing::Point;
use crate::models::node::{ConceptNode, NodeId};
use std::collections::BTreeMap;
use std::f64::consts::TAU;

/// Distance of non-root concepts from the root.
pub const LAYOUT_RADIUS: f64 = 350.0;

/// Position of the concept at `index` out of `total`.
///
/// The root (index 0) sits at the origin; every other concept sits on a
/// circle at `angle = index / total * 2π`.
pub fn radial_position(index: usize, total: usize) -> Point {
    if index == 0 || total == 0 {
        return Point::ORIGIN;
    }
    let angle = index as f64 / total as f64 * TAU;
    Point::new(angle.cos() * LAYOUT_RADIUS, angle.sin() * LAYOUT_RADIUS)
}

/// Turn generated concepts into positioned nodes with no assets.
pub fn radial_layout(concepts: Vec<GeneratedConcept>) -> BTreeMap<NodeId, ConceptNode> {
    let total = concepts.len();
    concepts
        .into_iter()
        .enumerate()
        .map(|(index, concept)| {
            let position = radial_position(index, total);
            let mut node = ConceptNode::new(concept.id, concept.label, concept.description);
            node.x = position.x;
            node.y = position.y;
            node.children = concept.children;
            (node.id.clone(), node)
        })
        .collect()
}
