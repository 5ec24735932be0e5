// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Free-form sketches drawn over the concept map.
//!
//! This module defines the drawing elements users sketch on top of the
//! mind-map canvas. All geometry is stored in world coordinates.

use serde::{Deserialize, Serialize};

/// Stroke color given to every new drawing element.
pub const DEFAULT_DRAWING_COLOR: &str = "#3b82f6";

/// A 2D point. Used for world positions and, in the camera module,
/// for screen positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of a drawing element, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingKind {
    Pencil,
    Rectangle,
    Arrow,
    Circle,
    Text,
}

/// Kind-specific geometry of a drawing element.
///
/// `Circle` and `Text` are accepted when loading saved projects but are
/// never produced by the drawing tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawingShape {
    /// Freehand polyline, in drawing order.
    Pencil { points: Vec<Point> },
    /// Box spanned from the anchor by a signed delta.
    #[serde(rename = "rect", alias = "rectangle")]
    Rectangle { width: f64, height: f64 },
    /// Straight line from the anchor to `anchor + (width, height)`.
    Arrow { width: f64, height: f64 },
    Circle { width: f64, height: f64 },
    Text { text: String },
}

impl DrawingShape {
    pub fn kind(&self) -> DrawingKind {
        match self {
            DrawingShape::Pencil { .. } => DrawingKind::Pencil,
            DrawingShape::Rectangle { .. } => DrawingKind::Rectangle,
            DrawingShape::Arrow { .. } => DrawingKind::Arrow,
            DrawingShape::Circle { .. } => DrawingKind::Circle,
            DrawingShape::Text { .. } => DrawingKind::Text,
        }
    }
}

/// One sketch on the canvas, in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingElement {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub shape: DrawingShape,
    pub color: String,
}

impl DrawingElement {
    /// Start a pencil stroke whose first point is the anchor itself.
    pub fn pencil(anchor: Point) -> Self {
        Self::with_shape(anchor, DrawingShape::Pencil { points: vec![anchor] })
    }

    /// Start a zero-sized rectangle at the anchor.
    pub fn rectangle(anchor: Point) -> Self {
        Self::with_shape(anchor, DrawingShape::Rectangle { width: 0.0, height: 0.0 })
    }

    /// Start a zero-length arrow at the anchor.
    pub fn arrow(anchor: Point) -> Self {
        Self::with_shape(anchor, DrawingShape::Arrow { width: 0.0, height: 0.0 })
    }

    fn with_shape(anchor: Point, shape: DrawingShape) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            x: anchor.x,
            y: anchor.y,
            shape,
            color: DEFAULT_DRAWING_COLOR.to_string(),
        }
    }

    pub fn kind(&self) -> DrawingKind {
        self.shape.kind()
    }

    /// World position the element was started at.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extend the element to follow the pointer at `world`.
    ///
    /// Pencil strokes grow by one point; boxes and arrows take the signed
    /// delta from the anchor. Reserved kinds are left untouched.
    pub fn extend_to(&mut self, world: Point) {
        let (dx, dy) = (world.x - self.x, world.y - self.y);
        match &mut self.shape {
            DrawingShape::Pencil { points } => points.push(world),
            DrawingShape::Rectangle { width, height } | DrawingShape::Arrow { width, height } => {
                *width = dx;
                *height = dy;
            }
            DrawingShape::Circle { .. } | DrawingShape::Text { .. } => {}
        }
    }
}
