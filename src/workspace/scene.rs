// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Screen-space render model of a workspace.
//!
//! `Scene::build` projects the concept graph and the drawings through one
//! `CameraTransform`. The vector layer (edges, drawings) and the node panel
//! layer both read their positions from the same scene, so they can never
//! drift apart. The canvas only paints what is in here.

use super::camera::CameraTransform;
use crate::models::drawing::{DrawingElement, DrawingShape, Point};
use crate::models::node::NodeId;
use crate::models::project::Project;

/// Node panel width in world units.
pub const NODE_PANEL_WIDTH: f64 = 280.0;
/// Node panel height in world units.
pub const NODE_PANEL_HEIGHT: f64 = 120.0;
/// Growth factor applied to the selected node panel.
pub const SELECTED_PANEL_GROWTH: f64 = 1.05;
/// Edge thickness in screen pixels.
pub const EDGE_STROKE_WIDTH: f64 = 2.0;
/// Drawing thickness in screen pixels.
pub const DRAWING_STROKE_WIDTH: f64 = 3.0;
/// Dash and gap length of edges in world units.
pub const EDGE_DASH_LENGTH: f64 = 5.0;

/// World-space width that shows as `screen_width` pixels at `scale`.
pub fn world_stroke_width(screen_width: f64, scale: f64) -> f64 {
    screen_width / scale
}

/// A dashed parent to child connector.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLine {
    pub parent: NodeId,
    pub child: NodeId,
    pub from: Point,
    pub to: Point,
    pub stroke_width: f64,
    pub dash_length: f64,
}

/// Projected geometry of one drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline { points: Vec<Point> },
    /// Normalized box: `min` is the top-left corner.
    Rect { min: Point, max: Point },
    Line { from: Point, to: Point },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawingPrimitive {
    pub id: String,
    pub primitive: Primitive,
    pub color: String,
    pub stroke_width: f64,
    pub in_progress: bool,
}

/// A node panel placed on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePanel {
    pub id: NodeId,
    pub center: Point,
    pub width: f64,
    pub height: f64,
    /// Zoom scale the panel contents are drawn at.
    pub scale: f64,
    pub selected: bool,
}

impl NodePanel {
    pub fn min(&self) -> Point {
        Point::new(self.center.x - self.width / 2.0, self.center.y - self.height / 2.0)
    }

    pub fn max(&self) -> Point {
        Point::new(self.center.x + self.width / 2.0, self.center.y + self.height / 2.0)
    }

    pub fn contains(&self, screen: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        screen.x >= min.x && screen.x <= max.x && screen.y >= min.y && screen.y <= max.y
    }
}

/// Everything the canvas paints for one frame, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub transform: CameraTransform,
    pub edges: Vec<EdgeLine>,
    pub drawings: Vec<DrawingPrimitive>,
    /// Node panels, bottom to top. The selected panel is last.
    pub nodes: Vec<NodePanel>,
}

impl Scene {
    pub fn build(
        project: &Project,
        in_progress: Option<&DrawingElement>,
        selected: Option<&str>,
        transform: CameraTransform,
    ) -> Scene {
        let edge_width = transform.to_screen_length(world_stroke_width(EDGE_STROKE_WIDTH, transform.scale));
        let drawing_width =
            transform.to_screen_length(world_stroke_width(DRAWING_STROKE_WIDTH, transform.scale));

        // Flat iteration over direct children: cycles just yield overlapping edges.
        let edges = project
            .nodes
            .values()
            .flat_map(|node| {
                node.children.iter().filter_map(move |child_id| {
                    let child = project.nodes.get(child_id)?;
                    Some(EdgeLine {
                        parent: node.id.clone(),
                        child: child.id.clone(),
                        from: transform.world_to_screen(node.position()),
                        to: transform.world_to_screen(child.position()),
                        stroke_width: edge_width,
                        dash_length: transform.to_screen_length(EDGE_DASH_LENGTH),
                    })
                })
            })
            .collect();

        let committed = project.drawing_elements.iter().map(|el| (el, false));
        let preview = in_progress.into_iter().map(|el| (el, true));
        let drawings = committed
            .chain(preview)
            .filter_map(|(element, in_progress)| {
                Some(DrawingPrimitive {
                    id: element.id.clone(),
                    primitive: project_shape(element, &transform)?,
                    color: element.color.clone(),
                    stroke_width: drawing_width,
                    in_progress,
                })
            })
            .collect();

        let mut nodes: Vec<NodePanel> = project
            .nodes
            .values()
            .map(|node| {
                let is_selected = selected == Some(node.id.as_str());
                let growth = if is_selected { SELECTED_PANEL_GROWTH } else { 1.0 };
                NodePanel {
                    id: node.id.clone(),
                    center: transform.world_to_screen(node.position()),
                    width: transform.to_screen_length(NODE_PANEL_WIDTH) * growth,
                    height: transform.to_screen_length(NODE_PANEL_HEIGHT) * growth,
                    scale: transform.scale * growth,
                    selected: is_selected,
                }
            })
            .collect();
        nodes.sort_by_key(|panel| panel.selected);

        Scene {
            transform,
            edges,
            drawings,
            nodes,
        }
    }

    /// Topmost node panel under a screen position.
    pub fn node_at(&self, screen: Point) -> Option<&NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|panel| panel.contains(screen))
            .map(|panel| &panel.id)
    }

    pub fn panel(&self, id: &str) -> Option<&NodePanel> {
        self.nodes.iter().find(|panel| panel.id == id)
    }
}

/// Project a drawing into screen space. Reserved kinds have no geometry.
fn project_shape(element: &DrawingElement, transform: &CameraTransform) -> Option<Primitive> {
    let anchor = element.anchor();
    match &element.shape {
        DrawingShape::Pencil { points } => Some(Primitive::Polyline {
            points: points.iter().map(|p| transform.world_to_screen(*p)).collect(),
        }),
        DrawingShape::Rectangle { width, height } => {
            let a = transform.world_to_screen(anchor);
            let b = transform.world_to_screen(Point::new(anchor.x + width, anchor.y + height));
            Some(Primitive::Rect {
                min: Point::new(a.x.min(b.x), a.y.min(b.y)),
                max: Point::new(a.x.max(b.x), a.y.max(b.y)),
            })
        }
        DrawingShape::Arrow { width, height } => Some(Primitive::Line {
            from: transform.world_to_screen(anchor),
            to: transform.world_to_screen(Point::new(anchor.x + width, anchor.y + height)),
        }),
        DrawingShape::Circle { .. } | DrawingShape::Text { .. } => None,
    }
}
