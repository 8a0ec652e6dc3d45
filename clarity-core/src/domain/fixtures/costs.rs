// clarity-core/src/domain/fixtures/costs.rs

use serde::{Deserialize, Serialize};

use super::{Fixture, FixtureKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Effort uses the same three levels as priority.
pub type Effort = Priority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostCategory {
    Compute,
    Storage,
    Networking,
    Tools,
}

impl CostCategory {
    pub const ALL: [CostCategory; 4] = [
        Self::Compute,
        Self::Storage,
        Self::Networking,
        Self::Tools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Storage => "Storage",
            Self::Networking => "Networking",
            Self::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CostOverview {
    pub total_monthly_cost: f64,
    pub change_percentage: f64,
    /// 0-100 scale.
    pub budget_utilization: f64,
    pub budget_limit: f64,
    #[serde(rename = "costPerGB")]
    pub cost_per_gb: f64,
    pub cost_per_query: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryCost {
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CostBreakdown {
    #[serde(default)]
    pub compute: CategoryCost,
    #[serde(default)]
    pub storage: CategoryCost,
    #[serde(default)]
    pub networking: CategoryCost,
    #[serde(default)]
    pub tools: CategoryCost,
}

impl CostBreakdown {
    pub fn cost(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Compute => self.compute.cost,
            CostCategory::Storage => self.storage.cost,
            CostCategory::Networking => self.networking.cost,
            CostCategory::Tools => self.tools.cost,
        }
    }

    pub fn total(&self) -> f64 {
        CostCategory::ALL.iter().map(|c| self.cost(*c)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRecommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_savings: f64,
    pub priority: Priority,
    pub effort: Effort,
}

/// Root of `costs.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    #[serde(default)]
    pub overview: CostOverview,
    #[serde(default)]
    pub breakdown: CostBreakdown,
    #[serde(default)]
    pub optimization_recommendations: Vec<OptimizationRecommendation>,
}

impl Fixture for CostReport {
    const KIND: FixtureKind = FixtureKind::Costs;
}
