// clarity-core/src/application/incidents.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::filter::{Filter, Selector};
use crate::domain::fixtures::{Incident, IncidentFeed, IncidentStats};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentQuery {
    pub search: String,
    pub severity: Selector,
}

impl IncidentQuery {
    pub fn filter(&self) -> Filter {
        Filter::new(self.search.clone()).equals("severity", self.severity.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentsPage {
    pub stats: IncidentStats,
    pub incidents: Vec<Incident>,
}

pub fn build_incidents_page(feed: IncidentFeed, query: &IncidentQuery) -> IncidentsPage {
    let incidents = query
        .filter()
        .apply(&feed.incidents)
        .into_iter()
        .cloned()
        .collect();
    IncidentsPage {
        stats: feed.stats,
        incidents,
    }
}

#[instrument(skip(source))]
pub async fn load_incidents_page(
    source: &dyn FixtureSource,
    query: &IncidentQuery,
) -> Result<IncidentsPage, ClarityError> {
    let feed: IncidentFeed = load_fixture(source).await?;
    Ok(build_incidents_page(feed, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::Severity;
    use crate::infrastructure::fixtures::EmbeddedFixtures;
    use anyhow::Result;

    #[tokio::test]
    async fn test_severity_filter_is_applied() -> Result<()> {
        let query = IncidentQuery {
            severity: Selector::value("high"),
            ..Default::default()
        };
        let page = load_incidents_page(&EmbeddedFixtures, &query).await?;
        assert_eq!(page.incidents.len(), 2);
        assert!(page.incidents.iter().all(|i| i.severity == Severity::High));
        // Stats describe the whole feed, not the filtered view
        assert_eq!(page.stats.total, 7);
        Ok(())
    }

    #[tokio::test]
    async fn test_text_search_over_title_and_description() -> Result<()> {
        let query = IncidentQuery {
            search: "LEGACY".into(),
            ..Default::default()
        };
        let page = load_incidents_page(&EmbeddedFixtures, &query).await?;
        let ids: Vec<&str> = page.incidents.iter().map(|i| i.id.as_str()).collect();
        assert!(ids.contains(&"INC-2037"));
        for incident in &page.incidents {
            let haystack = format!("{} {}", incident.title, incident.description).to_lowercase();
            assert!(haystack.contains("legacy"));
        }
        Ok(())
    }
}
