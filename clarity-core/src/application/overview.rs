// clarity-core/src/application/overview.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::fixtures::{
    Incident, IncidentFeed, ProfilingReport, QualityRule, RuleCatalog, Severity,
};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

const RECENT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyQuality {
    pub date: String,
    pub overall: f64,
    pub completeness: f64,
    pub uniqueness: f64,
    pub validity: f64,
    pub freshness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewPage {
    pub overall_score: f64,
    pub total_rules: usize,
    pub active_rules: usize,
    pub open_incidents: u64,
    pub total_incidents: u64,
    pub total_records: u64,
    pub total_tables: u64,
    pub trend: Vec<DailyQuality>,
    pub severity_distribution: Vec<(Severity, u64)>,
    pub recent_incidents: Vec<Incident>,
    pub rules: Vec<QualityRule>,
}

pub fn build_overview(
    profiling: ProfilingReport,
    incidents: IncidentFeed,
    rules: RuleCatalog,
) -> OverviewPage {
    let trend = profiling
        .trends
        .iter()
        .map(|t| DailyQuality {
            date: t.date.clone(),
            overall: t.overall(),
            completeness: t.completeness,
            uniqueness: t.uniqueness,
            validity: t.validity,
            freshness: t.freshness,
        })
        .collect();

    let severity_distribution = Severity::ALL
        .iter()
        .map(|&s| (s, incidents.stats.by_severity.get(s)))
        .collect();

    OverviewPage {
        overall_score: profiling.overall_score,
        total_rules: rules.rules.len(),
        active_rules: rules.active_count(),
        open_incidents: incidents.stats.open,
        total_incidents: incidents.stats.total,
        total_records: profiling.total_records,
        total_tables: profiling.total_tables,
        trend,
        severity_distribution,
        recent_incidents: incidents.incidents.into_iter().take(RECENT).collect(),
        rules: rules.rules.into_iter().take(RECENT).collect(),
    }
}

/// Joins the three loads; any failure fails the whole page.
#[instrument(skip(source))]
pub async fn load_overview(source: &dyn FixtureSource) -> Result<OverviewPage, ClarityError> {
    let (profiling, incidents, rules) = futures::try_join!(
        load_fixture::<ProfilingReport>(source),
        load_fixture::<IncidentFeed>(source),
        load_fixture::<RuleCatalog>(source),
    )?;
    Ok(build_overview(profiling, incidents, rules))
}
