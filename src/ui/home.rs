// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Home screen: start a new study map or resume a recent one.

use mindlist::models::project::Project;

/// Result of home screen interaction.
pub enum HomeAction {
    None,
    /// Build a new mind map for the trimmed topic.
    StartStudy(String),
    OpenProject(String),
}

/// Display the home screen.
pub fn show(ui: &mut egui::Ui, topic: &mut String, recent: &[Project]) -> HomeAction {
    let mut action = HomeAction::None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(
                egui::RichText::new("What are we studying today?")
                    .size(32.0)
                    .color(egui::Color32::WHITE),
            );
            ui.label(
                egui::RichText::new("Describe your topic to build your workspace.")
                    .size(16.0)
                    .color(egui::Color32::from_gray(150)),
            );
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let input = ui.add(
                    egui::TextEdit::singleline(topic)
                        .hint_text("Ex: Quantum Computing Fundamentals or Photosynthesis process...")
                        .desired_width(480.0),
                );
                let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (ui.button("Create Map").clicked() || submitted) && !topic.trim().is_empty() {
                    action = HomeAction::StartStudy(topic.trim().to_string());
                }
            });
        });

        ui.add_space(30.0);
        ui.label(egui::RichText::new("Resume Recent Projects").size(20.0).strong());
        ui.add_space(8.0);

        if recent.is_empty() {
            ui.label(
                egui::RichText::new("No projects yet. Start by describing a topic above!")
                    .color(egui::Color32::from_gray(110)),
            );
            return;
        }

        ui.horizontal_wrapped(|ui| {
            for project in recent {
                let card = egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(220.0);
                    ui.label(egui::RichText::new(&project.title).strong().size(16.0));
                    ui.label(
                        egui::RichText::new(format!("Created {}", project.created_label()))
                            .color(egui::Color32::from_gray(120)),
                    );
                    ui.label(format!(
                        "{} Nodes · {} Resources",
                        project.nodes.len(),
                        project.resources.len()
                    ));
                    ui.button("Open").clicked()
                });
                if card.inner {
                    action = HomeAction::OpenProject(project.id.clone());
                }
            }
        });
    });

    action
}
