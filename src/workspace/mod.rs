// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Workspace view state and input handling.
//!
//! A `Workspace` lives as long as one open workspace view. It interprets
//! pointer and wheel events according to the active tool and produces new
//! project values for the store when a drawing is committed.

pub mod camera;
pub mod capture;
pub mod jobs;
pub mod scene;
pub mod selection;
pub mod tools;

use crate::models::drawing::Point;
use crate::models::node::NodeId;
use crate::models::project::Project;
use camera::{Camera, Viewport};
use capture::DrawingCapture;
use scene::Scene;
use selection::{Inspector, Selection};
use tools::Tool;

/// What is under the pointer when a button goes down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Background,
    Node(NodeId),
}

/// View-scoped canvas state. Created fresh whenever a workspace is opened.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub camera: Camera,
    tool: Tool,
    capture: DrawingCapture,
    selection: Selection,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            log::debug!("Switched tool to {:?}", tool);
        }
        self.tool = tool;
    }

    pub fn is_panning(&self) -> bool {
        self.capture.is_panning()
    }

    pub fn is_drawing(&self) -> bool {
        self.capture.in_progress().is_some()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn select(&mut self, id: NodeId) {
        self.selection.select(id);
    }

    pub fn inspector<'a>(&self, project: &'a Project) -> Option<Inspector<'a>> {
        self.selection.inspect(project)
    }

    /// Render model for this frame.
    pub fn scene(&self, project: &Project, viewport: &Viewport) -> Scene {
        Scene::build(
            project,
            self.capture.in_progress(),
            self.selection.selected(),
            self.camera.transform(viewport),
        )
    }

    /// Primary button pressed at a screen position.
    ///
    /// Pressing on a node selects it. With the select tool a press on the
    /// background starts a pan; drawing tools start a new element at the
    /// pointer's world position wherever the press lands.
    pub fn pointer_down(&mut self, target: PointerTarget, pointer: Point, viewport: &Viewport) {
        let on_node = match target {
            PointerTarget::Node(id) => {
                self.selection.select(id);
                true
            }
            PointerTarget::Background => false,
        };

        let world = self.camera.screen_to_world(pointer, viewport);
        match self.tool.start_element(world) {
            Some(element) => self.capture.begin_element(element),
            None if !on_node => self.capture.begin_pan(&self.camera, pointer),
            None => {}
        }
    }

    pub fn pointer_move(&mut self, pointer: Point, viewport: &Viewport) {
        self.capture.pointer_move(&mut self.camera, pointer, viewport);
    }

    /// Primary button released. Returns the next project value when a
    /// drawing was committed.
    pub fn pointer_up(&mut self, project: &Project) -> Option<Project> {
        self.capture.finish(project)
    }

    /// Wheel event; `delta_y > 0` scrolls down.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64, zoom_modifier: bool) {
        self.camera.wheel(delta_x, delta_y, zoom_modifier);
    }

    /// Abort the current gesture and clear the selection.
    pub fn cancel(&mut self) {
        self.capture.cancel();
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drawing::{DrawingKind, DrawingShape};
    use crate::models::node::ConceptNode;
    use std::collections::BTreeMap;

    fn viewport() -> Viewport {
        Viewport::new(0.0, 0.0, 800.0, 600.0)
    }

    fn project() -> Project {
        let mut nodes = BTreeMap::new();
        nodes.insert("root".to_string(), ConceptNode::new("root", "Root", ""));
        Project::new("Workspace".to_string(), nodes)
    }

    #[test]
    fn test_select_on_background_pans() {
        let mut ws = Workspace::new();
        let project = project();
        let scene = ws.scene(&project, &viewport());
        let empty = Point::new(20.0, 20.0);
        assert_eq!(scene.node_at(empty), None);

        ws.pointer_down(PointerTarget::Background, empty, &viewport());
        assert!(ws.is_panning());
        assert_eq!(ws.selected(), None);

        ws.pointer_move(Point::new(50.0, 10.0), &viewport());
        assert_eq!(ws.camera.offset, Point::new(30.0, -10.0));

        assert!(ws.pointer_up(&project).is_none());
        assert!(!ws.is_panning());
    }

    #[test]
    fn test_select_on_node_selects_without_panning() {
        let mut ws = Workspace::new();
        let project = project();
        let center = Point::new(400.0, 300.0);
        let hit = ws.scene(&project, &viewport()).node_at(center).cloned();
        assert_eq!(hit.as_deref(), Some("root"));

        ws.pointer_down(PointerTarget::Node("root".to_string()), center, &viewport());
        assert!(!ws.is_panning());
        assert_eq!(ws.selected(), Some("root"));

        ws.pointer_move(Point::new(500.0, 400.0), &viewport());
        assert_eq!(ws.camera.offset, Point::ORIGIN);
    }

    #[test]
    fn test_drawing_tool_commits_on_release() {
        let mut ws = Workspace::new();
        ws.set_tool(Tool::Rectangle);
        let project = project();

        // Screen (405, 305) is world (5, 5) for this viewport.
        ws.pointer_down(PointerTarget::Background, Point::new(405.0, 305.0), &viewport());
        assert!(ws.is_drawing());
        assert!(!ws.is_panning());

        ws.pointer_move(Point::new(402.0, 301.0), &viewport());
        let next = ws.pointer_up(&project).unwrap();
        assert!(!ws.is_drawing());
        assert_eq!(ws.tool(), Tool::Rectangle);

        let element = &next.drawing_elements[0];
        assert_eq!(element.kind(), DrawingKind::Rectangle);
        assert_eq!((element.x, element.y), (5.0, 5.0));
        assert_eq!(element.shape, DrawingShape::Rectangle { width: -3.0, height: -4.0 });
    }

    #[test]
    fn test_drawing_over_node_still_draws() {
        let mut ws = Workspace::new();
        ws.set_tool(Tool::Pencil);

        ws.pointer_down(PointerTarget::Node("root".to_string()), Point::new(400.0, 300.0), &viewport());
        assert!(ws.is_drawing());
        assert_eq!(ws.selected(), Some("root"));
    }

    #[test]
    fn test_preview_uses_same_transform_as_commit() {
        let mut ws = Workspace::new();
        ws.set_tool(Tool::Arrow);
        ws.wheel(0.0, -1.0, true);
        ws.camera.pan(17.0, -9.0);
        let project = project();

        ws.pointer_down(PointerTarget::Background, Point::new(120.0, 80.0), &viewport());
        ws.pointer_move(Point::new(260.0, 190.0), &viewport());
        let preview = ws.scene(&project, &viewport()).drawings.pop().unwrap();

        let next = ws.pointer_up(&project).unwrap();
        let committed = ws.scene(&next, &viewport()).drawings.pop().unwrap();
        assert_eq!(preview.primitive, committed.primitive);
        assert!(preview.in_progress);
        assert!(!committed.in_progress);
    }

    #[test]
    fn test_cancel_discards_gesture_and_selection() {
        let mut ws = Workspace::new();
        ws.set_tool(Tool::Pencil);
        ws.select("root".to_string());
        ws.pointer_down(PointerTarget::Background, Point::new(1.0, 1.0), &viewport());

        ws.cancel();
        assert!(!ws.is_drawing());
        assert_eq!(ws.selected(), None);
        assert!(ws.pointer_up(&project()).is_none());
    }
}
