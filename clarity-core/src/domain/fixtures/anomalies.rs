// clarity-core/src/domain/fixtures/anomalies.rs

use serde::{Deserialize, Serialize};

use super::incidents::Severity;
use super::{Fixture, FixtureKind};
use crate::domain::filter::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Detector confidence in [0, 1].
    pub confidence: f64,
    pub category: String,
    pub detected_at: String,
    #[serde(default)]
    pub possible_causes: Vec<String>,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
    #[serde(default)]
    pub assignee: String,
}

impl Anomaly {
    /// Confidence as a whole percentage ("94% confidence").
    pub fn confidence_percent(&self) -> String {
        format!("{:.0}%", self.confidence * 100.0)
    }
}

impl Searchable for Anomaly {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.category.as_str(),
        ]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "severity" => Some(self.severity.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImpactAssessment {
    #[serde(default)]
    pub high: u64,
    #[serde(default)]
    pub medium: u64,
    #[serde(default)]
    pub low: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnomalyInsights {
    pub total_anomalies: u64,
    pub new_today: u64,
    pub resolved: u64,
    pub avg_confidence: f64,
    #[serde(default)]
    pub impact_assessment: ImpactAssessment,
}

/// Root of `anomalies.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFeed {
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    #[serde(default)]
    pub insights: AnomalyInsights,
}

impl Fixture for AnomalyFeed {
    const KIND: FixtureKind = FixtureKind::Anomalies;
}
