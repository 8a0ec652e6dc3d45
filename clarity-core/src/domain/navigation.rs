// clarity-core/src/domain/navigation.rs

use std::fmt;

/// The ten dashboard routes plus the catch-all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Overview,
    Rules,
    Executions,
    Profiling,
    Catalog,
    Incidents,
    Lineage,
    Anomalies,
    Costs,
    Governance,
    NotFound(String),
}

impl Route {
    pub const PAGES: [Route; 10] = [
        Self::Overview,
        Self::Rules,
        Self::Executions,
        Self::Profiling,
        Self::Catalog,
        Self::Incidents,
        Self::Lineage,
        Self::Anomalies,
        Self::Costs,
        Self::Governance,
    ];

    /// Never fails: unknown paths become `NotFound`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Self::Overview,
            "/rules" => Self::Rules,
            "/executions" => Self::Executions,
            "/profiling" => Self::Profiling,
            "/catalog" => Self::Catalog,
            "/incidents" => Self::Incidents,
            "/lineage" => Self::Lineage,
            "/anomalies" => Self::Anomalies,
            "/costs" => Self::Costs,
            "/governance" => Self::Governance,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Overview => "/",
            Self::Rules => "/rules",
            Self::Executions => "/executions",
            Self::Profiling => "/profiling",
            Self::Catalog => "/catalog",
            Self::Incidents => "/incidents",
            Self::Lineage => "/lineage",
            Self::Anomalies => "/anomalies",
            Self::Costs => "/costs",
            Self::Governance => "/governance",
            Self::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Data Quality Overview",
            Self::Rules => "Rule Management",
            Self::Executions => "Rule Execution",
            Self::Profiling => "Data Profiling",
            Self::Catalog => "Asset Catalog",
            Self::Incidents => "Incident Management",
            Self::Lineage => "Data Lineage Explorer",
            Self::Anomalies => "Anomaly Detection",
            Self::Costs => "Cost Observability",
            Self::Governance => "Data Governance",
            Self::NotFound(_) => "Page Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
