// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Infinite canvas for the concept map and free-form drawings.
//!
//! This module turns egui pointer and wheel input into workspace events,
//! then paints the frame's `Scene`: dashed edges and drawings first, node
//! panels on top.

use mindlist::models::drawing::Point;
use mindlist::models::node::NodeId;
use mindlist::models::project::Project;
use mindlist::workspace::camera::Viewport;
use mindlist::workspace::jobs::GenerationKind;
use mindlist::workspace::scene::{DrawingPrimitive, NodePanel, Primitive};
use mindlist::workspace::{PointerTarget, Workspace};

/// Result of canvas interaction.
pub enum CanvasAction {
    /// A drawing was finished; the store should take this project value.
    Commit(Project),
    /// A node panel button asked for generated content.
    Generate(NodeId, GenerationKind),
}

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(2, 6, 23);
const EDGE_COLOR: egui::Color32 = egui::Color32::from_rgb(51, 65, 85);
const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
const PANEL_FILL_SELECTED: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const PANEL_BORDER: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const PANEL_BORDER_SELECTED: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const STATUS_BAR_HEIGHT: f32 = 24.0;

fn to_pos(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

fn to_point(p: egui::Pos2) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

/// Display the canvas and handle mouse interactions.
///
/// `blocked` suppresses all input, e.g. while a notification is shown.
pub fn show(
    ui: &mut egui::Ui,
    project: &Project,
    workspace: &mut Workspace,
    is_pending: impl Fn(&str) -> bool,
    blocked: bool,
) -> Vec<CanvasAction> {
    let mut actions = Vec::new();

    let size = ui.available_size() - egui::vec2(0.0, STATUS_BAR_HEIGHT);
    let (rect, _response) = ui.allocate_exact_size(size.max(egui::Vec2::ZERO), egui::Sense::click_and_drag());
    let viewport = Viewport::from(rect);

    if !blocked {
        if let Some(next) = handle_input(ui, rect, &viewport, project, workspace) {
            actions.push(CanvasAction::Commit(next));
        }
    }

    let scene = workspace.scene(project, &viewport);
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);

    for edge in &scene.edges {
        painter.extend(egui::Shape::dashed_line(
            &[to_pos(edge.from), to_pos(edge.to)],
            egui::Stroke::new(edge.stroke_width as f32, EDGE_COLOR),
            edge.dash_length as f32,
            edge.dash_length as f32,
        ));
    }

    for drawing in &scene.drawings {
        paint_drawing(&painter, drawing);
    }

    for panel in &scene.nodes {
        if let Some(action) = show_node_panel(ui, &painter, project, panel, &is_pending, blocked) {
            actions.push(action);
        }
    }

    // Display current tool and zoom at the bottom
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Current tool: {:?}", workspace.tool()));
        ui.separator();
        ui.label(format!("Zoom: {:.0}%", workspace.camera.scale() * 100.0));
        ui.separator();
        ui.label(format!(
            "{} concepts, {} drawings",
            project.nodes.len(),
            project.drawing_elements.len()
        ));
    });

    actions
}

/// Feed this frame's pointer and wheel input to the workspace.
fn handle_input(
    ui: &egui::Ui,
    rect: egui::Rect,
    viewport: &Viewport,
    project: &Project,
    workspace: &mut Workspace,
) -> Option<Project> {
    let hovered = ui.rect_contains_pointer(rect);
    let (pressed, released, moving, pointer, scroll, zoom) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.is_moving(),
            i.pointer.interact_pos(),
            i.raw_scroll_delta,
            i.zoom_delta(),
        )
    });

    if hovered {
        // egui reports ctrl/cmd + wheel as zoom, plain wheel as scroll.
        if zoom != 1.0 {
            let delta_y = if zoom > 1.0 { -1.0 } else { 1.0 };
            workspace.wheel(0.0, delta_y, true);
        } else if scroll != egui::Vec2::ZERO {
            workspace.wheel(-scroll.x as f64, -scroll.y as f64, false);
        }

        let cursor = if workspace.tool().is_drawing() {
            egui::CursorIcon::Crosshair
        } else if workspace.is_panning() {
            egui::CursorIcon::Grabbing
        } else {
            egui::CursorIcon::Grab
        };
        ui.ctx().set_cursor_icon(cursor);
    }

    if let Some(pointer) = pointer.map(to_point) {
        if pressed && hovered {
            let target = match workspace.scene(project, viewport).node_at(pointer) {
                Some(id) => PointerTarget::Node(id.clone()),
                None => PointerTarget::Background,
            };
            workspace.pointer_down(target, pointer, viewport);
        } else if moving && (workspace.is_panning() || workspace.is_drawing()) {
            workspace.pointer_move(pointer, viewport);
        }
    }

    if released {
        return workspace.pointer_up(project);
    }
    None
}

fn paint_drawing(painter: &egui::Painter, drawing: &DrawingPrimitive) {
    let color = egui::Color32::from_hex(&drawing.color).unwrap_or(PANEL_BORDER_SELECTED);
    let stroke = egui::Stroke::new(drawing.stroke_width as f32, color);

    match &drawing.primitive {
        Primitive::Polyline { points } => {
            painter.add(egui::Shape::line(points.iter().copied().map(to_pos).collect(), stroke));
        }
        Primitive::Rect { min, max } => {
            painter.rect_stroke(egui::Rect::from_min_max(to_pos(*min), to_pos(*max)), 0.0, stroke);
        }
        Primitive::Line { from, to } => {
            painter.line_segment([to_pos(*from), to_pos(*to)], stroke);
        }
    }
}

/// Paint one node panel and its action buttons.
fn show_node_panel(
    ui: &mut egui::Ui,
    painter: &egui::Painter,
    project: &Project,
    panel: &NodePanel,
    is_pending: &impl Fn(&str) -> bool,
    blocked: bool,
) -> Option<CanvasAction> {
    let node = project.node(&panel.id)?;
    let scale = panel.scale as f32;
    let rect = egui::Rect::from_min_max(to_pos(panel.min()), to_pos(panel.max()));
    if !painter.clip_rect().intersects(rect) {
        return None;
    }

    let (fill, border) = if panel.selected {
        (PANEL_FILL_SELECTED, PANEL_BORDER_SELECTED)
    } else {
        (PANEL_FILL, PANEL_BORDER)
    };
    painter.rect(rect, 16.0 * scale, fill, egui::Stroke::new(2.0 * scale, border));

    let padding = 16.0 * scale;
    let inner_width = rect.width() - 2.0 * padding;
    let label = painter.layout(
        node.label.clone(),
        egui::FontId::proportional(14.0 * scale),
        egui::Color32::WHITE,
        inner_width,
    );
    let label_height = label.size().y;
    painter.galley(rect.min + egui::vec2(padding, padding), label, egui::Color32::WHITE);

    let description = painter.layout(
        node.short_description(90),
        egui::FontId::proportional(10.0 * scale),
        egui::Color32::from_gray(100),
        inner_width,
    );
    painter.galley(
        rect.min + egui::vec2(padding, padding + label_height + 4.0 * scale),
        description,
        egui::Color32::from_gray(100),
    );

    let button_height = 24.0 * scale;
    let buttons = egui::Rect::from_min_max(
        egui::pos2(rect.min.x + padding, rect.max.y - padding - button_height),
        egui::pos2(rect.max.x - padding, rect.max.y - padding),
    );

    if is_pending(&node.id) {
        ui.put(buttons, egui::Spinner::new().size(button_height));
        return None;
    }
    if blocked {
        return None;
    }

    let gap = 8.0 * scale;
    let half = (buttons.width() - gap) / 2.0;
    let video_rect = egui::Rect::from_min_size(buttons.min, egui::vec2(half, button_height));
    let learn_rect = egui::Rect::from_min_size(buttons.min + egui::vec2(half + gap, 0.0), egui::vec2(half, button_height));

    let font = 9.0 * scale;
    let video = ui.put(
        video_rect,
        egui::Button::new(egui::RichText::new("🎬 VIDEO").size(font).strong()),
    );
    let learn = ui.put(
        learn_rect,
        egui::Button::new(egui::RichText::new("🧠 LEARN").size(font).strong().color(egui::Color32::WHITE))
            .fill(PANEL_BORDER_SELECTED),
    );

    if video.clicked() {
        Some(CanvasAction::Generate(node.id.clone(), GenerationKind::Video))
    } else if learn.clicked() {
        Some(CanvasAction::Generate(node.id.clone(), GenerationKind::Content))
    } else {
        None
    }
}
