// clarity-core/src/domain/fixtures/governance.rs
//
// The governance page has no fixture document: its data is built in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    Active,
    Draft,
}

impl PolicyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: PolicyStatus,
    /// 0-100.
    pub compliance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub level: String,
    pub assets: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceOverview {
    pub active_policies: u64,
    pub pending_approval: u64,
    pub compliance_score: f64,
    pub policies: Vec<Policy>,
    pub classifications: Vec<Classification>,
}

impl GovernanceOverview {
    pub fn builtin() -> Self {
        let policy = |id, name: &str, kind: &str, status, compliance| Policy {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            status,
            compliance,
        };
        let class = |level: &str, assets| Classification {
            level: level.to_string(),
            assets,
        };

        Self {
            active_policies: 12,
            pending_approval: 3,
            compliance_score: 96.5,
            policies: vec![
                policy(1, "PII Data Access Policy", "Access Control", PolicyStatus::Active, 98.0),
                policy(2, "Data Retention Policy", "Retention", PolicyStatus::Active, 95.0),
                policy(3, "GDPR Compliance", "Privacy", PolicyStatus::Active, 100.0),
                policy(4, "Financial Data Security", "Security", PolicyStatus::Draft, 0.0),
            ],
            classifications: vec![
                class("Highly Confidential", 45),
                class("Confidential", 128),
                class("Internal", 89),
                class("Public", 12),
            ],
        }
    }

    pub fn classified_assets(&self) -> u64 {
        self.classifications.iter().map(|c| c.assets).sum()
    }
}
