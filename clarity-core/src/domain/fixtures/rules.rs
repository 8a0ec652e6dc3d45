// clarity-core/src/domain/fixtures/rules.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Fixture, FixtureKind};
use crate::domain::filter::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Active,
    Paused,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "–",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    Continuous,
    Hourly,
    Daily,
    Weekly,
}

impl Schedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub database: String,
    pub schema: String,
    pub table: String,
    pub rule_type: String,
    pub status: RuleStatus,
    pub current_score: f64,
    pub threshold: f64,
    #[serde(default)]
    pub trend: Trend,
    pub schedule: Schedule,
    pub execution_count: u64,
    pub failure_count: u64,
    pub last_run: String,
}

impl QualityRule {
    /// `schema.table`, as displayed on the rule card.
    pub fn qualified_table(&self) -> String {
        format!("{}.{}", self.schema, self.table)
    }

    pub fn is_below_threshold(&self) -> bool {
        self.current_score < self.threshold
    }
}

impl Searchable for QualityRule {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.database.as_str(),
        ]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(self.status.as_str()),
            "database" => Some(self.database.as_str()),
            "ruleType" => Some(self.rule_type.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseRef {
    pub name: String,
}

/// Root of `rules.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCatalog {
    #[serde(default)]
    pub rules: Vec<QualityRule>,
    #[serde(default)]
    pub databases: Vec<DatabaseRef>,
    #[serde(default)]
    pub rule_types: Vec<String>,
}

impl RuleCatalog {
    pub fn active_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| r.status == RuleStatus::Active)
            .count()
    }
}

impl Fixture for RuleCatalog {
    const KIND: FixtureKind = FixtureKind::Rules;
}
