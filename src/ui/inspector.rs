// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Study inspector panel.
//!
//! Shows the notes, generated assets and video script of the selected
//! concept, and offers the same generation actions as the node panels.

use mindlist::models::node::{AssetKind, NodeAsset, NodeId};
use mindlist::workspace::jobs::GenerationKind;
use mindlist::workspace::selection::Inspector;

/// Result of inspector interaction.
pub enum InspectorAction {
    None,
    Generate(NodeId, GenerationKind),
}

/// Display the inspector for the selected node, if any.
pub fn show(ui: &mut egui::Ui, inspector: Option<Inspector<'_>>, pending: bool) -> InspectorAction {
    let mut action = InspectorAction::None;

    ui.heading("Study Inspector");
    ui.label(egui::RichText::new("Dive deep into selected concepts").weak());
    ui.separator();

    let Some(inspector) = inspector else {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Select a node to inspect its materials, notes, and generated media.")
                    .color(egui::Color32::from_gray(120)),
            );
        });
        return action;
    };
    let node = inspector.node();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(egui::RichText::new(&node.label).strong().size(16.0));
        ui.label(egui::RichText::new(&node.description).weak());

        if pending {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating...");
            });
        }

        ui.add_space(12.0);
        section_heading(ui, "STUDY NOTES", egui::Color32::from_rgb(59, 130, 246));
        match inspector.notes() {
            Some(notes) => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(notes);
                });
            }
            None => {
                if ui
                    .add_enabled(!pending, egui::Button::new("Generate Study Notes").min_size(egui::vec2(ui.available_width(), 32.0)))
                    .clicked()
                {
                    action = InspectorAction::Generate(node.id.clone(), GenerationKind::Content);
                }
            }
        }

        ui.add_space(12.0);
        section_heading(ui, "NODE ASSETS", egui::Color32::from_rgb(99, 102, 241));
        if inspector.assets().is_empty() {
            ui.label(egui::RichText::new("No assets yet").weak());
        }
        for asset in inspector.assets() {
            show_asset(ui, asset);
        }

        ui.horizontal_wrapped(|ui| {
            for kind in [GenerationKind::Image, GenerationKind::Infographic, GenerationKind::Video] {
                if ui
                    .add_enabled(!pending, egui::Button::new(format!("Generate {}", kind.label())))
                    .clicked()
                {
                    action = InspectorAction::Generate(node.id.clone(), kind);
                }
            }
        });

        if let Some(script) = inspector.script() {
            ui.add_space(12.0);
            section_heading(ui, "VIDEO SCRIPT", egui::Color32::from_rgb(168, 85, 247));
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(script).monospace().italics());
            });
        }
    });

    action
}

fn section_heading(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).strong().small().color(color));
}

fn show_asset(ui: &mut egui::Ui, asset: &NodeAsset) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        let icon = match asset.kind {
            AssetKind::Video => "🎬",
            AssetKind::Image => "🖼",
            AssetKind::Infographic => "📊",
        };
        let created = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(asset.timestamp)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        ui.label(format!("{} {} · {}", icon, asset.kind.label(), created));

        if asset.url.starts_with("http") {
            ui.hyperlink_to("Open", &asset.url);
        } else {
            let preview: String = asset.url.chars().take(48).collect();
            ui.label(egui::RichText::new(format!("{}…", preview)).weak().small());
            if ui.small_button("Copy locator").clicked() {
                ui.output_mut(|o| o.copied_text = asset.url.clone());
            }
        }
    });
}
