// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Canvas tool selection.
//!
//! Exactly one tool is active at a time. Tools only change through the
//! toolbar, never as a side effect of a gesture.

use crate::models::drawing::{DrawingElement, Point};

/// Current canvas tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pan the canvas and select concept nodes.
    #[default]
    Select,
    Pencil,
    Rectangle,
    Arrow,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 4] = [Tool::Select, Tool::Pencil, Tool::Rectangle, Tool::Arrow];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "⬆ Select",
            Tool::Pencil => "✏ Pencil",
            Tool::Rectangle => "▭ Rectangle",
            Tool::Arrow => "➡ Arrow",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Tool::Select => "Drag the background to pan, click a concept to inspect it",
            Tool::Pencil => "Drag to sketch a freehand stroke",
            Tool::Rectangle => "Drag to draw a box",
            Tool::Arrow => "Drag to draw an arrow",
        }
    }

    pub fn is_drawing(&self) -> bool {
        !matches!(self, Tool::Select)
    }

    /// Begin a new element for this tool at a world position.
    ///
    /// Returns `None` for the select tool.
    pub fn start_element(&self, world: Point) -> Option<DrawingElement> {
        match self {
            Tool::Select => None,
            Tool::Pencil => Some(DrawingElement::pencil(world)),
            Tool::Rectangle => Some(DrawingElement::rectangle(world)),
            Tool::Arrow => Some(DrawingElement::arrow(world)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::drawing::{DrawingKind, DrawingShape};

    #[test]
    fn test_default_tool_is_select() {
        assert_eq!(Tool::default(), Tool::Select);
        assert!(!Tool::Select.is_drawing());
    }

    #[test]
    fn test_start_element_matches_tool() {
        let at = Point::new(4.0, -2.0);

        assert!(Tool::Select.start_element(at).is_none());

        let pencil = Tool::Pencil.start_element(at).unwrap();
        assert_eq!(pencil.shape, DrawingShape::Pencil { points: vec![at] });

        let rect = Tool::Rectangle.start_element(at).unwrap();
        assert_eq!(rect.kind(), DrawingKind::Rectangle);
        assert_eq!(rect.shape, DrawingShape::Rectangle { width: 0.0, height: 0.0 });

        let arrow = Tool::Arrow.start_element(at).unwrap();
        assert_eq!(arrow.kind(), DrawingKind::Arrow);
        assert_eq!(arrow.anchor(), at);
    }
}
