// clarity-core/src/domain/fixtures/mod.rs
//
// Typed records for the eight fixture documents. Field names follow the
// camelCase JSON contract; every document gets one root type.

pub mod anomalies;
pub mod assets;
pub mod costs;
pub mod executions;
pub mod governance;
pub mod incidents;
pub mod lineage;
pub mod profiling;
pub mod rules;

pub use anomalies::{Anomaly, AnomalyFeed, AnomalyInsights, ImpactAssessment};
pub use assets::{
    AssetCatalog, CatalogSchema, CatalogSummary, CatalogTable, DataSource, SourceStatus,
};
pub use costs::{
    CostBreakdown, CostCategory, CostOverview, CostReport, Effort, OptimizationRecommendation,
    Priority,
};
pub use executions::{
    ExecutionLog, ExecutionReport, ExecutionResult, ExecutionStatus, ExecutionSummary, LogLevel,
    ResourceMetrics, RuleExecution,
};
pub use governance::{Classification, GovernanceOverview, Policy, PolicyStatus};
pub use incidents::{Incident, IncidentFeed, IncidentStats, IncidentStatus, Severity, SeverityCounts};
pub use lineage::{LineageEdge, LineageGraph, LineageMetadata, LineageNode, NodeKind};
pub use profiling::{
    DimensionMetrics, ProfiledColumn, ProfiledDatabase, ProfiledSchema, ProfiledTable,
    ProfilingReport, QualityTrend,
};
pub use rules::{DatabaseRef, QualityRule, RuleCatalog, RuleStatus, Schedule, Trend};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Logical dataset names, one per bundled JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FixtureKind {
    Rules,
    RuleExecutions,
    Profiling,
    Assets,
    Incidents,
    Lineage,
    Anomalies,
    Costs,
}

impl FixtureKind {
    pub const ALL: [FixtureKind; 8] = [
        Self::Rules,
        Self::RuleExecutions,
        Self::Profiling,
        Self::Assets,
        Self::Incidents,
        Self::Lineage,
        Self::Anomalies,
        Self::Costs,
    ];

    /// File stem of the JSON document (`ruleExecutions.json`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::RuleExecutions => "ruleExecutions",
            Self::Profiling => "profiling",
            Self::Assets => "assets",
            Self::Incidents => "incidents",
            Self::Lineage => "lineage",
            Self::Anomalies => "anomalies",
            Self::Costs => "costs",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FixtureKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rules" => Ok(Self::Rules),
            "ruleExecutions" | "rule-executions" | "executions" => Ok(Self::RuleExecutions),
            "profiling" => Ok(Self::Profiling),
            "assets" => Ok(Self::Assets),
            "incidents" => Ok(Self::Incidents),
            "lineage" => Ok(Self::Lineage),
            "anomalies" => Ok(Self::Anomalies),
            "costs" => Ok(Self::Costs),
            _ => Err(DomainError::UnknownFixture(s.to_string())),
        }
    }
}

/// A document that can be loaded from a fixture source.
pub trait Fixture: DeserializeOwned + Serialize + Send + 'static {
    const KIND: FixtureKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_its_file_stem() -> anyhow::Result<()> {
        for kind in FixtureKind::ALL {
            assert_eq!(kind.as_str().parse::<FixtureKind>()?, kind);
        }
        Ok(())
    }

    #[test]
    fn test_kind_accepts_cli_spelling() -> anyhow::Result<()> {
        assert_eq!(
            "rule-executions".parse::<FixtureKind>()?,
            FixtureKind::RuleExecutions
        );
        assert_eq!(FixtureKind::RuleExecutions.file_name(), "ruleExecutions.json");
        Ok(())
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let res = "governance".parse::<FixtureKind>();
        assert!(matches!(res, Err(DomainError::UnknownFixture(name)) if name == "governance"));
    }
}
