// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pan/zoom camera for the infinite canvas.
//!
//! World space is centered on the root concept. A `CameraTransform` maps
//! it onto the viewport as `screen = world * scale + viewport_center + offset`.
//! The transform is computed once per frame and handed to every layer that
//! projects geometry, and its inverse is what input handlers use to place
//! new drawings.

use crate::models::drawing::Point;

/// Smallest allowed zoom scale.
pub const MIN_SCALE: f64 = 0.1;
/// Largest allowed zoom scale.
pub const MAX_SCALE: f64 = 3.0;
/// Scale multiplier for one wheel notch towards the user (zoom in).
pub const ZOOM_IN_FACTOR: f64 = 1.1;
/// Scale multiplier for one wheel notch away from the user (zoom out).
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// On-screen bounding box of the canvas container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Screen position of the viewport center.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl From<egui::Rect> for Viewport {
    fn from(rect: egui::Rect) -> Self {
        Self::new(
            rect.min.x as f64,
            rect.min.y as f64,
            rect.width() as f64,
            rect.height() as f64,
        )
    }
}

/// The world/screen mapping for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    /// Screen position of the world origin.
    pub origin: Point,
    pub scale: f64,
}

impl CameraTransform {
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.origin.x,
            world.y * self.scale + self.origin.y,
        )
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.origin.x) / self.scale,
            (screen.y - self.origin.y) / self.scale,
        )
    }

    /// Screen length of a world-space length.
    pub fn to_screen_length(&self, world_length: f64) -> f64 {
        world_length * self.scale
    }
}

/// Pan offset and zoom scale of one workspace view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Pan offset in screen pixels.
    pub offset: Point,
    scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset: Point::ORIGIN,
            scale: 1.0,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the scale, clamped into `[MIN_SCALE, MAX_SCALE]`.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Transform for the given viewport.
    pub fn transform(&self, viewport: &Viewport) -> CameraTransform {
        let center = viewport.center();
        CameraTransform {
            origin: Point::new(center.x + self.offset.x, center.y + self.offset.y),
            scale: self.scale,
        }
    }

    pub fn world_to_screen(&self, world: Point, viewport: &Viewport) -> Point {
        self.transform(viewport).world_to_screen(world)
    }

    pub fn screen_to_world(&self, screen: Point, viewport: &Viewport) -> Point {
        self.transform(viewport).screen_to_world(screen)
    }

    /// Shift the pan offset by a screen-space delta.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Apply one wheel event. `delta_y > 0` means scrolling down/forward.
    ///
    /// With the zoom modifier held the scale steps by `ZOOM_OUT_FACTOR` or
    /// `ZOOM_IN_FACTOR`; otherwise the raw delta pans the view.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64, has_modifier: bool) {
        if has_modifier {
            let factor = if delta_y > 0.0 { ZOOM_OUT_FACTOR } else { ZOOM_IN_FACTOR };
            self.set_scale(self.scale * factor);
        } else {
            self.pan(-delta_x, -delta_y);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale * ZOOM_OUT_FACTOR);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
