// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background generation requests for concept nodes.
//!
//! Each request runs on its own thread and reports back over a channel that
//! the UI drains once per frame. A node has at most one request in flight;
//! requests for different nodes run independently.

use crate::generation::{layout, ContentGenerator, NodeContent};
use crate::models::node::{AssetKind, ConceptNode, NodeAsset, NodeId};
use crate::models::project::Project;
use std::any::Any;
use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;

/// What a node action asks the generator for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    /// Study notes and a video script.
    Content,
    Image,
    Infographic,
    Video,
}

impl GenerationKind {
    pub fn label(&self) -> &'static str {
        match self {
            GenerationKind::Content => "Learn",
            GenerationKind::Image => "Image",
            GenerationKind::Infographic => "Infographic",
            GenerationKind::Video => "Video",
        }
    }
}

/// Successful result of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    Content(NodeContent),
    /// An empty `url` means nothing was produced.
    Asset {
        kind: AssetKind,
        url: String,
        prompt: String,
    },
}

/// Completion message of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub project_id: String,
    pub node_id: NodeId,
    pub result: Result<GenerationResult, String>,
}

impl GenerationOutcome {
    /// Next project value with the result merged in.
    ///
    /// `None` when the request failed, produced nothing, or targets a
    /// different project or a node that no longer exists.
    pub fn apply(&self, project: &Project) -> Option<Project> {
        if project.id != self.project_id {
            return None;
        }
        match self.result.as_ref().ok()? {
            GenerationResult::Content(content) => {
                project.with_node_content(&self.node_id, &content.notes, &content.script)
            }
            GenerationResult::Asset { url, .. } if url.is_empty() => None,
            GenerationResult::Asset { kind, url, prompt } => project.with_node_asset(
                &self.node_id,
                NodeAsset::new(*kind, url.clone(), Some(prompt.clone())),
            ),
        }
    }
}

/// Tracks in-flight requests and collects their outcomes.
pub struct GenerationJobs {
    pending: HashSet<(String, NodeId)>,
    sender: Sender<GenerationOutcome>,
    receiver: Receiver<GenerationOutcome>,
}

impl Default for GenerationJobs {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationJobs {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            pending: HashSet::new(),
            sender,
            receiver,
        }
    }

    pub fn is_pending(&self, project_id: &str, node_id: &str) -> bool {
        self.pending
            .contains(&(project_id.to_string(), node_id.to_string()))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Start a request for `node` unless one is already running for it.
    ///
    /// Returns whether a request was started.
    pub fn request(
        &mut self,
        generator: Arc<dyn ContentGenerator>,
        project_id: &str,
        node: &ConceptNode,
        kind: GenerationKind,
    ) -> bool {
        let key = (project_id.to_string(), node.id.clone());
        if self.pending.contains(&key) {
            log::warn!("Generation already running for node {}, ignoring {:?}", node.id, kind);
            return false;
        }
        self.pending.insert(key);
        log::info!("Requested {:?} generation for node {}", kind, node.id);

        let sender = self.sender.clone();
        let project_id = project_id.to_string();
        let node_id = node.id.clone();
        let label = node.label.clone();
        let description = node.description.clone();

        std::thread::spawn(move || {
            let result = catch_unwind(AssertUnwindSafe(|| {
                run(generator.as_ref(), kind, &label, &description)
            }))
            .unwrap_or_else(|payload| Err(anyhow::anyhow!("generator panicked: {}", panic_message(&*payload))))
            .map_err(|e| format!("{:#}", e));
            let _ = sender.send(GenerationOutcome {
                project_id,
                node_id,
                result,
            });
        });
        true
    }

    /// Drain finished requests, clearing their pending flags.
    pub fn poll(&mut self) -> Vec<GenerationOutcome> {
        let outcomes: Vec<GenerationOutcome> = self.receiver.try_iter().collect();
        for outcome in &outcomes {
            self.pending
                .remove(&(outcome.project_id.clone(), outcome.node_id.clone()));
            match &outcome.result {
                Ok(_) => log::info!("Generation finished for node {}", outcome.node_id),
                Err(e) => log::warn!("Generation failed for node {}: {}", outcome.node_id, e),
            }
        }
        outcomes
    }
}

/// A mind map being built for a new project on a worker thread.
pub struct MindMapRequest {
    receiver: Receiver<Result<Project, String>>,
}

impl MindMapRequest {
    pub fn spawn(generator: Arc<dyn ContentGenerator>, topic: String) -> Self {
        let (sender, receiver) = channel();

        std::thread::spawn(move || {
            let result = catch_unwind(AssertUnwindSafe(|| generator.generate_mind_map(&topic)))
                .unwrap_or_else(|payload| Err(anyhow::anyhow!("generator panicked: {}", panic_message(&*payload))))
                .map(|concepts| {
                    log::info!("Generated {} concepts for '{}'", concepts.len(), topic);
                    Project::new(topic.clone(), layout::radial_layout(concepts))
                })
                .map_err(|e| format!("{:#}", e));

            let _ = sender.send(result);
        });

        Self { receiver }
    }

    /// The finished project, or `None` while the worker is still running.
    ///
    /// A worker that exits without reporting counts as a failure.
    pub fn poll(&self) -> Option<Result<Project, String>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err("mind map worker stopped without a result".to_string())),
        }
    }
}

/// Text of a panic payload raised with a string message.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

fn run(
    generator: &dyn ContentGenerator,
    kind: GenerationKind,
    label: &str,
    description: &str,
) -> anyhow::Result<GenerationResult> {
    let asset = |kind: AssetKind, url: String| GenerationResult::Asset {
        kind,
        url,
        prompt: label.to_string(),
    };
    Ok(match kind {
        GenerationKind::Content => {
            GenerationResult::Content(generator.generate_node_content(label, description)?)
        }
        GenerationKind::Image => asset(AssetKind::Image, generator.generate_node_image(label, description)?),
        GenerationKind::Infographic => asset(
            AssetKind::Infographic,
            generator.generate_node_image(label, description)?,
        ),
        GenerationKind::Video => asset(AssetKind::Video, generator.generate_node_video(label, description)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GeneratedConcept;
    use crate::models::drawing::Point;
    use anyhow::{anyhow, Result};
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    /// Generator whose image requests block until the test releases them.
    struct GatedGenerator {
        gate: Mutex<Receiver<()>>,
    }

    impl ContentGenerator for GatedGenerator {
        fn generate_mind_map(&self, topic: &str) -> Result<Vec<GeneratedConcept>> {
            if topic == "Crash" {
                panic!("mind map backend crashed");
            }
            Ok(vec![
                GeneratedConcept {
                    id: "root".to_string(),
                    label: topic.to_string(),
                    description: String::new(),
                    children: vec!["leaf".to_string()],
                },
                GeneratedConcept {
                    id: "leaf".to_string(),
                    label: "Leaf".to_string(),
                    description: String::new(),
                    children: Vec::new(),
                },
            ])
        }

        fn generate_node_content(&self, label: &str, _description: &str) -> Result<NodeContent> {
            if label == "Broken" {
                return Err(anyhow!("service unavailable"));
            }
            if label == "Crash" {
                panic!("content backend crashed");
            }
            Ok(NodeContent {
                notes: format!("notes for {}", label),
                script: String::new(),
            })
        }

        fn generate_node_image(&self, label: &str, _description: &str) -> Result<String> {
            let gate = self.gate.lock().map_err(|_| anyhow!("gate poisoned"))?;
            gate.recv()?;
            Ok(format!("data:image/png;base64,{}", label))
        }

        fn generate_node_video(&self, _label: &str, _description: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    fn gated() -> (Arc<dyn ContentGenerator>, Sender<()>) {
        let (release, gate) = channel();
        (Arc::new(GatedGenerator { gate: Mutex::new(gate) }), release)
    }

    fn project() -> Project {
        let mut nodes = BTreeMap::new();
        for (id, label) in [("a", "Atoms"), ("b", "Bonds"), ("x", "Broken"), ("c", "Crash")] {
            nodes.insert(id.to_string(), ConceptNode::new(id, label, "desc"));
        }
        Project::new("Chemistry".to_string(), nodes)
    }

    fn wait_for(jobs: &mut GenerationJobs, count: usize) -> Vec<GenerationOutcome> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut outcomes = Vec::new();
        while outcomes.len() < count && Instant::now() < deadline {
            outcomes.extend(jobs.poll());
            std::thread::sleep(Duration::from_millis(5));
        }
        outcomes
    }

    #[test]
    fn test_same_node_is_not_requested_twice() {
        let (generator, release) = gated();
        let project = project();
        let node = project.node("a").unwrap();
        let mut jobs = GenerationJobs::new();

        assert!(jobs.request(generator.clone(), &project.id, node, GenerationKind::Image));
        assert!(!jobs.request(generator.clone(), &project.id, node, GenerationKind::Content));
        assert!(jobs.is_pending(&project.id, "a"));
        assert_eq!(jobs.pending_count(), 1);

        release.send(()).unwrap();
        let outcomes = wait_for(&mut jobs, 1);
        assert_eq!(outcomes.len(), 1);
        assert!(!jobs.is_pending(&project.id, "a"));

        let next = outcomes[0].apply(&project).unwrap();
        let assets = &next.node("a").unwrap().assets;
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].kind, AssetKind::Image);
        assert_eq!(assets[0].prompt.as_deref(), Some("Atoms"));
    }

    #[test]
    fn test_different_nodes_run_independently() {
        let (generator, release) = gated();
        let project = project();
        let mut jobs = GenerationJobs::new();

        assert!(jobs.request(generator.clone(), &project.id, project.node("a").unwrap(), GenerationKind::Image));
        assert!(jobs.request(generator.clone(), &project.id, project.node("b").unwrap(), GenerationKind::Content));

        // "b" finishes while "a" is still blocked.
        let outcomes = wait_for(&mut jobs, 1);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].node_id, "b");
        assert!(jobs.is_pending(&project.id, "a"));
        assert!(!jobs.is_pending(&project.id, "b"));

        let next = outcomes[0].apply(&project).unwrap();
        assert_eq!(next.node("b").unwrap().notes.as_deref(), Some("notes for Bonds"));

        release.send(()).unwrap();
        assert_eq!(wait_for(&mut jobs, 1).len(), 1);
        assert_eq!(jobs.pending_count(), 0);
    }

    #[test]
    fn test_failure_clears_pending_and_changes_nothing() {
        let (generator, _release) = gated();
        let project = project();
        let mut jobs = GenerationJobs::new();

        assert!(jobs.request(generator, &project.id, project.node("x").unwrap(), GenerationKind::Content));
        let outcomes = wait_for(&mut jobs, 1);

        assert!(outcomes[0].result.is_err());
        assert!(!jobs.is_pending(&project.id, "x"));
        assert!(outcomes[0].apply(&project).is_none());
    }

    #[test]
    fn test_panicking_generator_clears_pending() {
        let (generator, _release) = gated();
        let project = project();
        let node = project.node("c").unwrap();
        let mut jobs = GenerationJobs::new();

        assert!(jobs.request(generator.clone(), &project.id, node, GenerationKind::Content));
        let outcomes = wait_for(&mut jobs, 1);

        assert_eq!(outcomes.len(), 1);
        let error = outcomes[0].result.as_ref().unwrap_err();
        assert!(error.contains("content backend crashed"));
        assert!(!jobs.is_pending(&project.id, "c"));
        assert!(outcomes[0].apply(&project).is_none());

        // The node accepts new requests afterwards.
        assert!(jobs.request(generator, &project.id, node, GenerationKind::Video));
        assert_eq!(wait_for(&mut jobs, 1).len(), 1);
    }

    #[test]
    fn test_panic_message_reads_string_payloads() {
        let literal = catch_unwind(|| panic!("static text")).unwrap_err();
        assert_eq!(panic_message(&*literal), "static text");

        let formatted = catch_unwind(|| panic!("code {}", 7)).unwrap_err();
        assert_eq!(panic_message(&*formatted), "code 7");
    }

    #[test]
    fn test_infographic_uses_image_operation() {
        let (generator, release) = gated();
        let project = project();
        let mut jobs = GenerationJobs::new();

        assert!(jobs.request(generator, &project.id, project.node("b").unwrap(), GenerationKind::Infographic));
        release.send(()).unwrap();
        let outcomes = wait_for(&mut jobs, 1);
        assert_eq!(outcomes.len(), 1);

        let next = outcomes[0].apply(&project).unwrap();
        let assets = &next.node("b").unwrap().assets;
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].kind, AssetKind::Infographic);
        assert_eq!(assets[0].url, "data:image/png;base64,Bonds");
        assert_eq!(assets[0].prompt.as_deref(), Some("Bonds"));
    }

    #[test]
    fn test_empty_video_request_appends_nothing() {
        let (generator, _release) = gated();
        let project = project();
        let mut jobs = GenerationJobs::new();

        assert!(jobs.request(generator, &project.id, project.node("a").unwrap(), GenerationKind::Video));
        let outcomes = wait_for(&mut jobs, 1);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            outcomes[0].result,
            Ok(GenerationResult::Asset {
                kind: AssetKind::Video,
                url: String::new(),
                prompt: "Atoms".to_string(),
            })
        );
        assert!(!jobs.is_pending(&project.id, "a"));
        assert!(outcomes[0].apply(&project).is_none());
    }

    fn wait_for_project(request: &MindMapRequest) -> Option<Result<Project, String>> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(result) = request.poll() {
                return Some(result);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_mind_map_request_builds_laid_out_project() {
        let (generator, _release) = gated();
        let request = MindMapRequest::spawn(generator, "Optics".to_string());

        let project = wait_for_project(&request).unwrap().unwrap();
        assert_eq!(project.title, "Optics");
        assert_eq!(project.nodes.len(), 2);
        assert_eq!(project.node("root").unwrap().position(), Point::ORIGIN);
        assert!((project.node("leaf").unwrap().x + 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_mind_map_request_reports_panics_as_failures() {
        let (generator, _release) = gated();
        let request = MindMapRequest::spawn(generator, "Crash".to_string());

        let error = wait_for_project(&request).unwrap().unwrap_err();
        assert!(error.contains("mind map backend crashed"));
    }

    #[test]
    fn test_mind_map_request_reports_dropped_worker() {
        let (sender, receiver) = channel::<Result<Project, String>>();
        drop(sender);
        let request = MindMapRequest { receiver };

        assert!(request.poll().unwrap().is_err());
    }

    #[test]
    fn test_empty_asset_is_not_appended() {
        let project = project();
        let outcome = GenerationOutcome {
            project_id: project.id.clone(),
            node_id: "a".to_string(),
            result: Ok(GenerationResult::Asset {
                kind: AssetKind::Video,
                url: String::new(),
                prompt: "Atoms".to_string(),
            }),
        };
        assert!(outcome.apply(&project).is_none());
    }

    #[test]
    fn test_outcome_only_applies_to_its_project() {
        let project = project();
        let outcome = GenerationOutcome {
            project_id: "another".to_string(),
            node_id: "a".to_string(),
            result: Ok(GenerationResult::Content(NodeContent {
                notes: "n".to_string(),
                script: "s".to_string(),
            })),
        };
        assert!(outcome.apply(&project).is_none());
    }
}
