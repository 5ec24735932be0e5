// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar and tool selection UI.
//!
//! This module provides the toolbar for switching between the select tool
//! and the drawing tools, plus quick zoom controls.

use mindlist::workspace::tools::Tool;
use mindlist::workspace::Workspace;

/// Display the toolbar with tool selection buttons.
pub fn show(ui: &mut egui::Ui, workspace: &mut Workspace) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label("Tools:");

        ui.separator();

        for tool in Tool::ALL {
            if ui.selectable_label(workspace.tool() == tool, tool.label()).clicked() {
                workspace.set_tool(tool);
            }
        }

        ui.separator();

        if ui.small_button("−").on_hover_text("Zoom out").clicked() {
            workspace.camera.zoom_out();
        }
        if ui.small_button("+").on_hover_text("Zoom in").clicked() {
            workspace.camera.zoom_in();
        }
        if ui.small_button("⟲").on_hover_text("Reset view").clicked() {
            workspace.camera.reset();
        }

        ui.separator();

        // Tool description
        ui.label(egui::RichText::new(workspace.tool().hint()).italics().weak());
    });
}
