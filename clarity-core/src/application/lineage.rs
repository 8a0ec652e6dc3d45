// clarity-core/src/application/lineage.rs

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::fixtures::{LineageEdge, LineageGraph, LineageMetadata, LineageNode};
use crate::domain::format::BadgeVariant;
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

const KEY_NODES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineageFormat {
    #[default]
    Mermaid,
    Json,
}

impl FromStr for LineageFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mermaid" => Ok(Self::Mermaid),
            "json" => Ok(Self::Json),
            _ => Err(DomainError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LineageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mermaid => write!(f, "mermaid"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStatus {
    Healthy,
    Warning,
}

impl PipelineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Warning => "Warning",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Healthy => BadgeVariant::Default,
            Self::Warning => BadgeVariant::Secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStage {
    pub name: &'static str,
    pub status: PipelineStatus,
}

/// Static stage statuses shown next to the graph; not derived from the data.
pub fn pipeline_health() -> Vec<PipelineStage> {
    use PipelineStatus::*;
    vec![
        PipelineStage { name: "Source to Warehouse", status: Healthy },
        PipelineStage { name: "Data Transformations", status: Healthy },
        PipelineStage { name: "Analytics Processing", status: Warning },
        PipelineStage { name: "Reporting Layer", status: Healthy },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineagePage {
    pub metadata: LineageMetadata,
    pub key_nodes: Vec<LineageNode>,
    pub edges: Vec<LineageEdge>,
    pub pipeline: Vec<PipelineStage>,
}

pub fn build_lineage_page(graph: LineageGraph) -> LineagePage {
    LineagePage {
        metadata: graph.metadata,
        key_nodes: graph.nodes.into_iter().take(KEY_NODES).collect(),
        edges: graph.edges,
        pipeline: pipeline_health(),
    }
}

#[instrument(skip(source))]
pub async fn load_lineage_page(source: &dyn FixtureSource) -> Result<LineagePage, ClarityError> {
    let graph: LineageGraph = load_fixture(source).await?;
    Ok(build_lineage_page(graph))
}

/// Full graph as Mermaid flowchart text or pretty JSON.
pub fn render_lineage(graph: &LineageGraph, format: LineageFormat) -> Result<String, ClarityError> {
    match format {
        LineageFormat::Mermaid => Ok(graph.to_mermaid()),
        LineageFormat::Json => serde_json::to_string_pretty(graph)
            .map_err(|e| ClarityError::InternalError(e.to_string())),
    }
}

#[instrument(skip(source))]
pub async fn export_lineage(
    source: &dyn FixtureSource,
    format: LineageFormat,
) -> Result<String, ClarityError> {
    let graph: LineageGraph = load_fixture(source).await?;
    render_lineage(&graph, format)
}
