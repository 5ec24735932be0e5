// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation sidebar.

use crate::app::View;

/// Result of sidebar interaction.
pub enum SidebarAction {
    None,
    /// Switch to the given view. Entering the workspace remounts it.
    Navigate(View),
}

/// Display the view switcher. The workspace entry is only enabled while a
/// project is open.
pub fn show(ui: &mut egui::Ui, current_view: View, projects_count: usize, has_active_project: bool) -> SidebarAction {
    let mut action = SidebarAction::None;

    ui.add_space(8.0);
    ui.heading("MindList");
    ui.separator();

    if ui.selectable_label(current_view == View::Home, "🏠 Home").clicked() && current_view != View::Home {
        action = SidebarAction::Navigate(View::Home);
    }
    let workspace = ui.add_enabled(
        has_active_project,
        egui::SelectableLabel::new(current_view == View::Workspace, "🗺 Workspace"),
    );
    if workspace.clicked() && current_view != View::Workspace {
        action = SidebarAction::Navigate(View::Workspace);
    }

    ui.separator();
    ui.label(egui::RichText::new(format!("{} saved projects", projects_count)).weak());

    action
}
