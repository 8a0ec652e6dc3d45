// clarity-core/src/domain/fixtures/lineage.rs

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{Fixture, FixtureKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    SourceSystem,
    Transformation,
    Database,
    Table,
    Dashboard,
    #[serde(other)]
    Other,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceSystem => "source_system",
            Self::Transformation => "transformation",
            Self::Database => "database",
            Self::Table => "table",
            Self::Dashboard => "dashboard",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineageMetadata {
    pub total_nodes: u64,
    pub source_systems: u64,
    pub transformations: u64,
    pub visualizations: u64,
}

/// Root of `lineage.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageGraph {
    #[serde(default)]
    pub nodes: Vec<LineageNode>,
    #[serde(default)]
    pub edges: Vec<LineageEdge>,
    #[serde(default)]
    pub metadata: LineageMetadata,
}

impl LineageGraph {
    /// Edges whose endpoints are not declared nodes.
    pub fn dangling_edges(&self) -> Vec<&LineageEdge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .collect()
    }

    /// Flowchart source. Nodes get positional ids (`n0`, `n1`, ...) so
    /// distinct fixture ids never merge; undeclared edge endpoints are
    /// appended as nodes labelled with their raw id.
    pub fn to_mermaid(&self) -> String {
        let mut ids: HashMap<&str, usize> = HashMap::new();
        let mut labels: Vec<&str> = Vec::new();

        for node in &self.nodes {
            intern(&mut ids, &mut labels, &node.id, &node.name);
        }
        let edges: Vec<(usize, usize)> = self
            .edges
            .iter()
            .map(|e| {
                (
                    intern(&mut ids, &mut labels, &e.source, &e.source),
                    intern(&mut ids, &mut labels, &e.target, &e.target),
                )
            })
            .collect();

        let mut lines = vec!["graph LR".to_string()];
        for (index, label) in labels.iter().enumerate() {
            lines.push(format!("    n{}[\"{}\"]", index, mermaid_label(label)));
        }
        for (source, target) in edges {
            lines.push(format!("    n{} --> n{}", source, target));
        }
        lines.join("\n")
    }
}

fn intern<'a>(
    ids: &mut HashMap<&'a str, usize>,
    labels: &mut Vec<&'a str>,
    id: &'a str,
    label: &'a str,
) -> usize {
    *ids.entry(id).or_insert_with(|| {
        labels.push(label);
        labels.len() - 1
    })
}

fn mermaid_label(label: &str) -> String {
    label.replace('"', "#quot;")
}

impl Fixture for LineageGraph {
    const KIND: FixtureKind = FixtureKind::Lineage;
}
