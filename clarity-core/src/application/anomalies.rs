// clarity-core/src/application/anomalies.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::filter::{Filter, Selector};
use crate::domain::fixtures::{Anomaly, AnomalyFeed, AnomalyInsights};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnomalyQuery {
    pub search: String,
    pub severity: Selector,
}

impl AnomalyQuery {
    pub fn filter(&self) -> Filter {
        Filter::new(self.search.clone()).equals("severity", self.severity.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomaliesPage {
    pub insights: AnomalyInsights,
    pub anomalies: Vec<Anomaly>,
}

pub fn build_anomalies_page(feed: AnomalyFeed, query: &AnomalyQuery) -> AnomaliesPage {
    let anomalies = query
        .filter()
        .apply(&feed.anomalies)
        .into_iter()
        .cloned()
        .collect();
    AnomaliesPage {
        insights: feed.insights,
        anomalies,
    }
}

#[instrument(skip(source))]
pub async fn load_anomalies_page(
    source: &dyn FixtureSource,
    query: &AnomalyQuery,
) -> Result<AnomaliesPage, ClarityError> {
    let feed: AnomalyFeed = load_fixture(source).await?;
    Ok(build_anomalies_page(feed, query))
}
