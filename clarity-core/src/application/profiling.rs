// clarity-core/src/application/profiling.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::fixtures::{ProfiledDatabase, ProfilingReport};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub overall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilingPage {
    pub overall_score: f64,
    pub total_tables: u64,
    pub total_columns: u64,
    pub total_records: u64,
    pub last_updated: String,
    pub metrics: Vec<(String, f64)>,
    pub trend: Vec<TrendPoint>,
    pub databases: Vec<ProfiledDatabase>,
    /// Drill-down target, schemas and tables included.
    pub selected: Option<ProfiledDatabase>,
}

pub fn build_profiling_page(
    report: ProfilingReport,
    database: Option<&str>,
) -> Result<ProfilingPage, DomainError> {
    let selected = match database {
        Some(name) => Some(
            report
                .database(name)
                .cloned()
                .ok_or_else(|| DomainError::DatabaseNotFound(name.to_string()))?,
        ),
        None => None,
    };

    Ok(ProfilingPage {
        overall_score: report.overall_score,
        total_tables: report.total_tables,
        total_columns: report.total_columns,
        total_records: report.total_records,
        metrics: report
            .metrics
            .as_pairs()
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect(),
        trend: report
            .trends
            .iter()
            .map(|t| TrendPoint {
                date: t.date.clone(),
                overall: t.overall(),
            })
            .collect(),
        last_updated: report.last_updated,
        databases: report.databases,
        selected,
    })
}

#[instrument(skip(source))]
pub async fn load_profiling_page(
    source: &dyn FixtureSource,
    database: Option<&str>,
) -> Result<ProfilingPage, ClarityError> {
    let report: ProfilingReport = load_fixture(source).await?;
    Ok(build_profiling_page(report, database)?)
}
