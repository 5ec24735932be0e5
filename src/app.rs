// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. It owns the project store, routes between the
//! home screen and the workspace, and runs generation work in the
//! background.

use crate::ui::{canvas, home, inspector, sidebar, toolbar};
use mindlist::config::AppConfig;
use mindlist::generation::ContentGenerator;
use mindlist::io::{serialization, store::ProjectStore};
use mindlist::models::node::NodeId;
use mindlist::models::project::Project;
use mindlist::workspace::jobs::{GenerationJobs, GenerationKind, MindMapRequest};
use mindlist::workspace::Workspace;
use std::sync::Arc;
use std::time::Duration;

/// Top-level view being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Workspace,
}

/// Main application state.
pub struct MindListApp {
    config: AppConfig,

    /// All saved projects
    store: ProjectStore,

    /// Service producing mind maps and node material
    generator: Arc<dyn ContentGenerator>,

    /// Currently displayed view
    view: View,

    /// Id of the project open in the workspace
    active_project: Option<String>,

    /// Canvas state of the open workspace, recreated on every open
    workspace: Workspace,

    /// In-flight per-node generation requests
    jobs: GenerationJobs,

    /// Topic typed on the home screen
    topic_input: String,

    /// Background mind map creation
    mind_map_loader: Option<MindMapRequest>,

    /// Loading state message
    loading_message: Option<String>,

    /// Blocking notification shown until dismissed
    notification: Option<String>,

    show_about: bool,
}

impl MindListApp {
    /// Create a new application instance.
    pub fn new(config: AppConfig, store: ProjectStore, generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            config,
            store,
            generator,
            view: View::Home,
            active_project: None,
            workspace: Workspace::new(),
            jobs: GenerationJobs::new(),
            topic_input: String::new(),
            mind_map_loader: None,
            loading_message: None,
            notification: None,
            show_about: false,
        }
    }

    fn active_project(&self) -> Option<&Project> {
        self.active_project.as_deref().and_then(|id| self.store.get(id))
    }

    /// Replace a project in the store and persist the collection.
    fn update_project(&mut self, next: Project) {
        if !self.store.update_project(next) {
            log::warn!("Dropped update for a project that is no longer stored");
            return;
        }
        self.save_store();
    }

    fn save_store(&self) {
        if let Err(e) = self.store.save() {
            log::error!("Failed to save projects to {}: {:#}", self.config.data_file.display(), e);
        }
    }

    /// Open a project in a freshly mounted workspace.
    fn open_project(&mut self, id: String) {
        log::info!("Opening project {}", id);
        self.active_project = Some(id);
        self.workspace = Workspace::new();
        self.view = View::Workspace;
    }

    /// Switch views. Entering the workspace mounts a fresh one.
    fn navigate(&mut self, view: View) {
        match view {
            View::Workspace => {
                if let Some(id) = self.active_project.clone() {
                    self.open_project(id);
                }
            }
            View::Home => self.view = View::Home,
        }
    }

    /// Build a mind map for `topic` in the background.
    fn start_study(&mut self, topic: String) {
        if self.mind_map_loader.is_some() {
            return;
        }
        self.mind_map_loader = Some(MindMapRequest::spawn(Arc::clone(&self.generator), topic));
        self.loading_message = Some("Building your workspace...".to_string());
    }

    /// Ask the generator for material for one node of the active project.
    fn request_generation(&mut self, node_id: NodeId, kind: GenerationKind) {
        let Some(project) = self.active_project() else {
            return;
        };
        let Some(node) = project.node(&node_id) else {
            log::warn!("Generation requested for unknown node {}", node_id);
            return;
        };
        let project_id = project.id.clone();
        let node = node.clone();
        self.jobs
            .request(Arc::clone(&self.generator), &project_id, &node, kind);
    }

    /// Apply finished background work.
    fn poll_background(&mut self) {
        if let Some(ref request) = self.mind_map_loader {
            if let Some(result) = request.poll() {
                self.mind_map_loader = None;
                self.loading_message = None;

                match result {
                    Ok(project) => {
                        log::info!("Created project '{}' with {} nodes", project.title, project.nodes.len());
                        let id = project.id.clone();
                        self.store.insert(project);
                        self.save_store();
                        self.topic_input.clear();
                        self.open_project(id);
                    }
                    Err(e) => {
                        log::error!("Mind map generation failed: {}", e);
                        self.notification = Some("Study plan generation failed.".to_string());
                    }
                }
            }
        }

        for outcome in self.jobs.poll() {
            let next = self
                .store
                .get(&outcome.project_id)
                .and_then(|project| outcome.apply(project));
            if let Some(next) = next {
                self.update_project(next);
            }
        }
    }

    /// Export the active project to a file.
    fn export_project(&self, path: std::path::PathBuf) {
        if let Some(project) = self.active_project() {
            match serialization::export_project(project, &path) {
                Ok(_) => log::info!("Exported project to {}", path.display()),
                Err(e) => log::error!("Failed to export project: {}", e),
            }
        }
    }

    /// Import a project from a file and open it.
    fn import_project(&mut self, path: std::path::PathBuf) {
        match serialization::import_project(&path) {
            Ok(project) => {
                log::info!("Imported project '{}' from {}", project.title, path.display());
                let id = project.id.clone();
                self.store.upsert(project);
                self.save_store();
                self.open_project(id);
            }
            Err(e) => {
                log::error!("Failed to import project: {}", e);
                self.notification = Some(format!("Could not import {}.", path.display()));
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Study").clicked() {
                        self.view = View::Home;
                        ui.close_menu();
                    }
                    if ui.button("Import Project...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Projects", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.import_project(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    let has_project = self.active_project().is_some();
                    ui.add_enabled_ui(has_project, |ui| {
                        ui.menu_button("Export Project", |ui| {
                            if ui.button("Export as YAML...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("YAML", &["yaml", "yml"])
                                    .set_file_name("project.yaml")
                                    .save_file()
                                {
                                    self.export_project(path);
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export as JSON...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("project.json")
                                    .save_file()
                                {
                                    self.export_project(path);
                                }
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Zoom In").clicked() {
                        self.workspace.camera.zoom_in();
                        ui.close_menu();
                    }
                    if ui.button("Zoom Out").clicked() {
                        self.workspace.camera.zoom_out();
                        ui.close_menu();
                    }
                    if ui.button("Reset View").clicked() {
                        self.workspace.camera.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.notification.clone() {
            egui::Window::new("Something went wrong")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.notification = None;
                    }
                });
        }

        if self.show_about {
            egui::Window::new("About MindList")
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_about)
                .show(ctx, |ui| {
                    ui.label(format!("MindList {}", env!("CARGO_PKG_VERSION")));
                    ui.label("Describe a topic, explore its mind map, sketch on the canvas.");
                });
        }
    }

    fn workspace_view(&mut self, ctx: &egui::Context, blocked: bool) {
        let Some(project) = self.active_project().cloned() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("Open a project from the home screen to begin");
                });
            });
            return;
        };

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::show(ui, &mut self.workspace);
        });

        // Inspector panel (right side)
        let pending = |node_id: &str| self.jobs.is_pending(&project.id, node_id);
        let inspector_action = egui::SidePanel::right("inspector")
            .default_width(360.0)
            .show(ctx, |ui| {
                let selected_pending = self.workspace.selected().is_some_and(pending);
                inspector::show(ui, self.workspace.inspector(&project), selected_pending)
            })
            .inner;

        // Escape discards the gesture in progress and the selection
        if !blocked && !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.workspace.cancel();
        }

        // Main canvas (center)
        let canvas_actions = egui::CentralPanel::default()
            .show(ctx, |ui| canvas::show(ui, &project, &mut self.workspace, pending, blocked))
            .inner;

        if let inspector::InspectorAction::Generate(node_id, kind) = inspector_action {
            self.request_generation(node_id, kind);
        }

        // Handle canvas actions
        for action in canvas_actions {
            match action {
                canvas::CanvasAction::Commit(next) => self.update_project(next),
                canvas::CanvasAction::Generate(node_id, kind) => self.request_generation(node_id, kind),
            }
        }
    }
}

impl eframe::App for MindListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background();

        // Keep polling while background work is running
        if self.loading_message.is_some() || self.jobs.pending_count() > 0 {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        let blocked = self.notification.is_some();

        self.menu_bar(ctx);

        let has_active = self.active_project().is_some();
        let sidebar_action = egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| sidebar::show(ui, self.view, self.store.len(), has_active))
            .inner;

        if let sidebar::SidebarAction::Navigate(view) = sidebar_action {
            self.navigate(view);
        }

        if let Some(ref message) = self.loading_message {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(message)
                                .size(16.0)
                                .color(egui::Color32::from_gray(200)),
                        );
                    });
                });
            });
        } else {
            match self.view {
                View::Home => {
                    let action = egui::CentralPanel::default()
                        .show(ctx, |ui| {
                            ui.add_enabled_ui(!blocked, |ui| {
                                home::show(ui, &mut self.topic_input, self.store.recent(3))
                            })
                            .inner
                        })
                        .inner;

                    match action {
                        home::HomeAction::StartStudy(topic) => self.start_study(topic),
                        home::HomeAction::OpenProject(id) => self.open_project(id),
                        home::HomeAction::None => {}
                    }
                }
                View::Workspace => self.workspace_view(ctx, blocked),
            }
        }

        self.dialogs(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindlist::generation::offline::OfflineGenerator;
    use mindlist::workspace::tools::Tool;
    use std::collections::BTreeMap;

    fn app_with_project() -> (MindListApp, String) {
        let mut store = ProjectStore::in_memory();
        let project = Project::new("Optics".to_string(), BTreeMap::new());
        let id = project.id.clone();
        store.insert(project);
        let app = MindListApp::new(AppConfig::default(), store, Arc::new(OfflineGenerator::new()));
        (app, id)
    }

    #[test]
    fn test_returning_to_workspace_remounts_it() {
        let (mut app, id) = app_with_project();
        app.open_project(id.clone());
        app.workspace.camera.pan(40.0, -25.0);
        app.workspace.camera.zoom_in();
        app.workspace.set_tool(Tool::Pencil);

        app.navigate(View::Home);
        assert_eq!(app.view, View::Home);
        app.navigate(View::Workspace);

        assert_eq!(app.view, View::Workspace);
        assert_eq!(app.active_project.as_deref(), Some(id.as_str()));
        assert_eq!(app.workspace.camera, mindlist::workspace::camera::Camera::new());
        assert_eq!(app.workspace.tool(), Tool::Select);
    }

    #[test]
    fn test_workspace_needs_an_open_project() {
        let (mut app, _) = app_with_project();
        app.navigate(View::Workspace);
        assert_eq!(app.view, View::Home);
    }
}
