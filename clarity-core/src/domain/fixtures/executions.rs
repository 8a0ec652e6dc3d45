// clarity-core/src/domain/fixtures/executions.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Fixture, FixtureKind};
use crate::domain::filter::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Completed,
    Failed,
    Running,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionResult {
    Passed,
    Failed,
}

impl ExecutionResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionLog {
    pub level: LogLevel,
    pub timestamp: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetrics {
    #[serde(default)]
    pub cpu_usage: String,
    #[serde(default)]
    pub memory_usage: String,
    #[serde(default, rename = "networkIO")]
    pub network_io: String,
}

impl ResourceMetrics {
    /// Leading integer of `cpuUsage` ("45%" -> 45), 0 when it has none.
    pub fn cpu_percent(&self) -> u32 {
        let digits: String = self
            .cpu_usage
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleExecution {
    pub id: String,
    pub rule_name: String,
    pub execution_time: String,
    pub duration: String,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub result: Option<ExecutionResult>,
    pub score: f64,
    pub records_processed: u64,
    pub records_passed: u64,
    pub records_failed: u64,
    #[serde(default)]
    pub logs: Vec<ExecutionLog>,
    #[serde(default)]
    pub metrics: ResourceMetrics,
}

impl Searchable for RuleExecution {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.rule_name.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    pub total_executions: u64,
    pub successful: u64,
    pub failed: u64,
    pub avg_duration: String,
    pub total_records_processed: u64,
}

impl ExecutionSummary {
    /// Share of successful executions on a 0-100 scale, 0 when nothing ran.
    pub fn success_rate(&self) -> f64 {
        if self.total_executions == 0 {
            return 0.0;
        }
        self.successful as f64 / self.total_executions as f64 * 100.0
    }
}

/// Root of `ruleExecutions.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    #[serde(default)]
    pub executions: Vec<RuleExecution>,
    #[serde(default)]
    pub summary: ExecutionSummary,
}

impl Fixture for ExecutionReport {
    const KIND: FixtureKind = FixtureKind::RuleExecutions;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_percent_takes_leading_integer() {
        let m = ResourceMetrics {
            cpu_usage: "45%".into(),
            ..Default::default()
        };
        assert_eq!(m.cpu_percent(), 45);
        let m = ResourceMetrics {
            cpu_usage: "n/a".into(),
            ..Default::default()
        };
        assert_eq!(m.cpu_percent(), 0);
    }

    #[test]
    fn test_success_rate_handles_empty_summary() {
        assert_eq!(ExecutionSummary::default().success_rate(), 0.0);
        let s = ExecutionSummary {
            total_executions: 4,
            successful: 3,
            ..Default::default()
        };
        assert!((s.success_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_running_execution_has_no_result() -> anyhow::Result<()> {
        let exec: RuleExecution = serde_json::from_str(
            r#"{"id":"e1","ruleName":"r","executionTime":"2024-01-15T14:50:00Z","duration":"1s",
                "status":"running","score":50,"recordsProcessed":1,"recordsPassed":1,"recordsFailed":0,
                "metrics":{"cpuUsage":"10%","memoryUsage":"1 GB","networkIO":"2 MB"}}"#,
        )?;
        assert_eq!(exec.result, None);
        assert!(exec.logs.is_empty());
        assert_eq!(exec.metrics.network_io, "2 MB");
        Ok(())
    }
}
