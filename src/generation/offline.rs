// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in generator that works without any network service.
//!
//! It derives a fixed set of study facets from the topic, writes template
//! notes and scripts, and renders simple SVG diagrams. It cannot produce
//! videos and answers video requests with an empty locator.

use super::{ContentGenerator, GeneratedConcept, NodeContent};
use anyhow::{bail, Result};

/// Facets every generated mind map is broken into, as (label, description).
const FACETS: [(&str, &str); 5] = [
    ("Foundations", "Background and history needed before diving in"),
    ("Key Terms", "Vocabulary and definitions used throughout the topic"),
    ("Core Principles", "The central ideas and how they fit together"),
    ("Applications", "Where the ideas show up in practice"),
    ("Misconceptions", "Common mistakes and how to avoid them"),
];

#[derive(Debug, Clone, Default)]
pub struct OfflineGenerator;

impl OfflineGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ContentGenerator for OfflineGenerator {
    fn generate_mind_map(&self, topic: &str) -> Result<Vec<GeneratedConcept>> {
        let topic = topic.trim();
        if topic.is_empty() {
            bail!("Cannot build a mind map for an empty topic");
        }

        let facet_ids: Vec<String> = (1..=FACETS.len()).map(|i| format!("facet-{}", i)).collect();

        let root = GeneratedConcept {
            id: "root".to_string(),
            label: topic.to_string(),
            description: format!("Study map for {}", topic),
            children: facet_ids.clone(),
        };
        let facets = facet_ids
            .into_iter()
            .zip(FACETS)
            .map(|(id, (label, description))| GeneratedConcept {
                id,
                label: format!("{}: {}", label, topic),
                description: description.to_string(),
                children: Vec::new(),
            });

        Ok(std::iter::once(root).chain(facets).collect())
    }

    fn generate_node_content(&self, label: &str, description: &str) -> Result<NodeContent> {
        let notes = format!(
            "# {label}\n\n{description}\n\n## Summary\n- What is {label}?\n- Why does it matter?\n- How does it connect to related concepts?\n\n## Review questions\n1. Explain {label} in your own words.\n2. Give one example of {label}.\n"
        );
        let script = format!(
            "[Intro] Today we look at {label}.\n[Body] {description}.\n[Outro] Pause and summarize {label} before moving on."
        );
        Ok(NodeContent { notes, script })
    }

    fn generate_node_image(&self, label: &str, description: &str) -> Result<String> {
        Ok(svg_data_uri(label, description))
    }

    fn generate_node_video(&self, label: &str, _description: &str) -> Result<String> {
        log::info!("Offline generator has no video backend, skipping video for '{}'", label);
        Ok(String::new())
    }
}

/// A titled card diagram as an inline `data:` URI.
fn svg_data_uri(label: &str, description: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='640' height='360'>\
<rect width='640' height='360' rx='24' fill='#0f172a'/>\
<circle cx='320' cy='130' r='60' fill='none' stroke='#3b82f6' stroke-width='6'/>\
<text x='320' y='250' fill='#f8fafc' font-size='28' text-anchor='middle'>{}</text>\
<text x='320' y='295' fill='#94a3b8' font-size='16' text-anchor='middle'>{}</text>\
</svg>",
        escape_xml(label),
        escape_xml(description)
    );
    format!("data:image/svg+xml;utf8,{}", svg.replace('%', "%25").replace('#', "%23"))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}
