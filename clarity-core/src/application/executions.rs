// clarity-core/src/application/executions.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::filter::{Filter, Selector};
use crate::domain::fixtures::{ExecutionReport, ExecutionSummary, RuleExecution};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionQuery {
    pub search: String,
    pub status: Selector,
}

impl ExecutionQuery {
    pub fn filter(&self) -> Filter {
        Filter::new(self.search.clone()).equals("status", self.status.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionsPage {
    pub summary: ExecutionSummary,
    /// Percentage, 0 when nothing ran.
    pub success_rate: f64,
    pub executions: Vec<RuleExecution>,
}

pub fn build_executions_page(report: ExecutionReport, query: &ExecutionQuery) -> ExecutionsPage {
    let executions = query
        .filter()
        .apply(&report.executions)
        .into_iter()
        .cloned()
        .collect();
    ExecutionsPage {
        success_rate: report.summary.success_rate(),
        summary: report.summary,
        executions,
    }
}

pub fn find_execution<'a>(
    report: &'a ExecutionReport,
    id: &str,
) -> Result<&'a RuleExecution, DomainError> {
    report
        .executions
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| DomainError::ExecutionNotFound(id.to_string()))
}

#[instrument(skip(source))]
pub async fn load_executions_page(
    source: &dyn FixtureSource,
    query: &ExecutionQuery,
) -> Result<ExecutionsPage, ClarityError> {
    let report: ExecutionReport = load_fixture(source).await?;
    Ok(build_executions_page(report, query))
}

/// The details dialog: logs and resource metrics of one run.
#[instrument(skip(source))]
pub async fn load_execution_details(
    source: &dyn FixtureSource,
    id: &str,
) -> Result<RuleExecution, ClarityError> {
    let report: ExecutionReport = load_fixture(source).await?;
    Ok(find_execution(&report, id)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::ExecutionStatus;
    use crate::infrastructure::fixtures::EmbeddedFixtures;
    use anyhow::Result;

    #[tokio::test]
    async fn test_status_filter() -> Result<()> {
        let query = ExecutionQuery {
            status: Selector::value("failed"),
            ..Default::default()
        };
        let page = load_executions_page(&EmbeddedFixtures, &query).await?;
        assert!(!page.executions.is_empty());
        assert!(page.executions.iter().all(|e| e.status == ExecutionStatus::Failed));
        Ok(())
    }

    #[tokio::test]
    async fn test_success_rate_from_summary() -> Result<()> {
        let page = load_executions_page(&EmbeddedFixtures, &ExecutionQuery::default()).await?;
        assert_eq!(page.summary.total_executions, 6);
        assert!((page.success_rate - 50.0).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_running_execution_has_no_result() -> Result<()> {
        let exec = load_execution_details(&EmbeddedFixtures, "exec-1003").await?;
        assert_eq!(exec.status, ExecutionStatus::Running);
        assert!(exec.result.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_execution() {
        let res = load_execution_details(&EmbeddedFixtures, "exec-0").await;
        assert!(matches!(
            res,
            Err(ClarityError::Domain(DomainError::ExecutionNotFound(id))) if id == "exec-0"
        ));
    }
}
