// clarity-core/src/domain/fixtures/profiling.rs

use serde::{Deserialize, Serialize};

use super::{Fixture, FixtureKind, Trend};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfiledColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default)]
    pub null_percentage: f64,
    #[serde(default)]
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfiledTable {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub record_count: u64,
    pub completeness: f64,
    pub uniqueness: f64,
    pub validity: f64,
    pub freshness: f64,
    #[serde(default)]
    pub columns: Vec<ProfiledColumn>,
}

impl ProfiledTable {
    pub fn issue_count(&self) -> usize {
        self.columns.iter().map(|c| c.issues.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfiledSchema {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub record_count: u64,
    #[serde(default)]
    pub tables: Vec<ProfiledTable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfiledDatabase {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub record_count: u64,
    #[serde(default)]
    pub schemas: Vec<ProfiledSchema>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DimensionScore {
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DimensionMetrics {
    #[serde(default)]
    pub completeness: DimensionScore,
    #[serde(default)]
    pub uniqueness: DimensionScore,
    #[serde(default)]
    pub validity: DimensionScore,
    #[serde(default)]
    pub freshness: DimensionScore,
}

impl DimensionMetrics {
    pub fn as_pairs(&self) -> [(&'static str, f64); 4] {
        [
            ("Completeness", self.completeness.score),
            ("Uniqueness", self.uniqueness.score),
            ("Validity", self.validity.score),
            ("Freshness", self.freshness.score),
        ]
    }
}

/// One day of the quality trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityTrend {
    pub date: String,
    pub completeness: f64,
    pub uniqueness: f64,
    pub validity: f64,
    pub freshness: f64,
}

impl QualityTrend {
    /// Unweighted mean of the four dimensions.
    pub fn overall(&self) -> f64 {
        (self.completeness + self.uniqueness + self.validity + self.freshness) / 4.0
    }
}

/// Root of `profiling.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilingReport {
    pub overall_score: f64,
    pub total_tables: u64,
    pub total_columns: u64,
    pub total_records: u64,
    pub last_updated: String,
    #[serde(default)]
    pub metrics: DimensionMetrics,
    #[serde(default)]
    pub databases: Vec<ProfiledDatabase>,
    #[serde(default)]
    pub trends: Vec<QualityTrend>,
}

impl ProfilingReport {
    pub fn database(&self, name: &str) -> Option<&ProfiledDatabase> {
        self.databases.iter().find(|db| db.name == name)
    }
}

impl Fixture for ProfilingReport {
    const KIND: FixtureKind = FixtureKind::Profiling;
}
