// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drag gesture capture.
//!
//! A gesture is either a camera pan or the construction of one drawing
//! element. The element lives here until the pointer is released, at which
//! point it is appended to the project in a single update.

use super::camera::{Camera, Viewport};
use crate::models::drawing::{DrawingElement, Point};
use crate::models::project::Project;

/// Active camera pan. `anchor` is the pointer position minus the pan offset
/// at drag start, so the offset is always `pointer - anchor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanDrag {
    pub anchor: Point,
}

/// State of the current pointer gesture.
#[derive(Debug, Clone, Default)]
pub struct DrawingCapture {
    pan: Option<PanDrag>,
    in_progress: Option<DrawingElement>,
}

impl DrawingCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    pub fn in_progress(&self) -> Option<&DrawingElement> {
        self.in_progress.as_ref()
    }

    /// Start panning from the pointer's screen position.
    pub fn begin_pan(&mut self, camera: &Camera, pointer: Point) {
        self.pan = Some(PanDrag {
            anchor: Point::new(pointer.x - camera.offset.x, pointer.y - camera.offset.y),
        });
    }

    /// Start a new in-progress element, replacing any unfinished one.
    pub fn begin_element(&mut self, element: DrawingElement) {
        self.in_progress = Some(element);
    }

    /// Follow the pointer: move the camera while panning, otherwise grow
    /// the in-progress element.
    pub fn pointer_move(&mut self, camera: &mut Camera, pointer: Point, viewport: &Viewport) {
        if let Some(drag) = self.pan {
            camera.offset = Point::new(pointer.x - drag.anchor.x, pointer.y - drag.anchor.y);
        } else if let Some(element) = self.in_progress.as_mut() {
            element.extend_to(camera.screen_to_world(pointer, viewport));
        }
    }

    /// End the gesture.
    ///
    /// Returns the next project value when an element was being drawn. Any
    /// pan drag ends unconditionally.
    pub fn finish(&mut self, project: &Project) -> Option<Project> {
        self.pan = None;
        let element = self.in_progress.take()?;
        log::info!(
            "Committed {:?} drawing, total: {}",
            element.kind(),
            project.drawing_elements.len() + 1
        );
        Some(project.with_drawing(element))
    }

    /// Drop the in-progress element without committing it.
    pub fn cancel(&mut self) {
        self.pan = None;
        self.in_progress = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drawing::{DrawingKind, DrawingShape};
    use std::collections::BTreeMap;

    fn viewport() -> Viewport {
        // World origin sits at screen (0, 0) with a fresh camera.
        Viewport::new(-400.0, -300.0, 800.0, 600.0)
    }

    fn empty_project() -> Project {
        Project::new("Test".to_string(), BTreeMap::new())
    }

    #[test]
    fn test_pencil_commit() {
        let mut camera = Camera::new();
        let mut capture = DrawingCapture::new();
        let project = empty_project();

        capture.begin_element(DrawingElement::pencil(Point::new(0.0, 0.0)));
        capture.pointer_move(&mut camera, Point::new(10.0, 0.0), &viewport());
        capture.pointer_move(&mut camera, Point::new(10.0, 10.0), &viewport());

        let next = capture.finish(&project).unwrap();
        assert!(capture.in_progress().is_none());
        assert_eq!(next.drawing_elements.len(), 1);

        let element = &next.drawing_elements[0];
        assert_eq!(element.kind(), DrawingKind::Pencil);
        assert_eq!(
            element.shape,
            DrawingShape::Pencil {
                points: vec![
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(10.0, 10.0)
                ]
            }
        );
    }

    #[test]
    fn test_rectangle_negative_extent() {
        let mut camera = Camera::new();
        let mut capture = DrawingCapture::new();

        capture.begin_element(DrawingElement::rectangle(Point::new(5.0, 5.0)));
        capture.pointer_move(&mut camera, Point::new(2.0, 1.0), &viewport());

        let next = capture.finish(&empty_project()).unwrap();
        let element = &next.drawing_elements[0];
        assert_eq!((element.x, element.y), (5.0, 5.0));
        assert_eq!(element.shape, DrawingShape::Rectangle { width: -3.0, height: -4.0 });
    }

    #[test]
    fn test_moves_use_world_coordinates() {
        let mut camera = Camera::new();
        camera.set_scale(2.0);
        let mut capture = DrawingCapture::new();

        capture.begin_element(DrawingElement::arrow(Point::new(0.0, 0.0)));
        capture.pointer_move(&mut camera, Point::new(40.0, -20.0), &viewport());

        let element = capture.in_progress().unwrap();
        assert_eq!(element.shape, DrawingShape::Arrow { width: 20.0, height: -10.0 });
    }

    #[test]
    fn test_pan_drag_recomputes_from_anchor() {
        let mut camera = Camera::new();
        camera.offset = Point::new(50.0, 50.0);
        let mut capture = DrawingCapture::new();

        capture.begin_pan(&camera, Point::new(100.0, 100.0));
        capture.pointer_move(&mut camera, Point::new(110.0, 95.0), &viewport());
        capture.pointer_move(&mut camera, Point::new(130.0, 90.0), &viewport());
        assert_eq!(camera.offset, Point::new(80.0, 40.0));

        assert!(capture.finish(&empty_project()).is_none());
        assert!(!capture.is_panning());

        capture.pointer_move(&mut camera, Point::new(500.0, 500.0), &viewport());
        assert_eq!(camera.offset, Point::new(80.0, 40.0));
    }

    #[test]
    fn test_release_without_gesture_is_noop() {
        let mut capture = DrawingCapture::new();
        assert!(capture.finish(&empty_project()).is_none());
    }

    #[test]
    fn test_cancel_discards_element() {
        let mut capture = DrawingCapture::new();
        capture.begin_element(DrawingElement::pencil(Point::new(1.0, 1.0)));
        capture.cancel();

        assert!(capture.in_progress().is_none());
        assert!(capture.finish(&empty_project()).is_none());
    }
}
