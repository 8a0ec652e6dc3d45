// clarity-core/src/application/catalog.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::filter::{Filter, Selector};
use crate::domain::fixtures::{AssetCatalog, CatalogSummary, DataSource};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub search: String,
    /// Matched by containment, so "postgres" selects "PostgreSQL".
    pub kind: Selector,
    pub status: Selector,
}

impl CatalogQuery {
    pub fn filter(&self) -> Filter {
        Filter::new(self.search.clone())
            .contains("type", self.kind.clone())
            .equals("status", self.status.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage {
    pub summary: CatalogSummary,
    pub sources: Vec<DataSource>,
}

pub fn build_catalog_page(catalog: AssetCatalog, query: &CatalogQuery) -> CatalogPage {
    let sources = query
        .filter()
        .apply(&catalog.data_sources)
        .into_iter()
        .cloned()
        .collect();
    CatalogPage {
        summary: catalog.summary,
        sources,
    }
}

#[instrument(skip(source))]
pub async fn load_catalog_page(
    source: &dyn FixtureSource,
    query: &CatalogQuery,
) -> Result<CatalogPage, ClarityError> {
    let catalog: AssetCatalog = load_fixture(source).await?;
    Ok(build_catalog_page(catalog, query))
}

/// One data source with its schemas and tables (the details panel).
#[instrument(skip(source))]
pub async fn load_data_source(
    source: &dyn FixtureSource,
    id: &str,
) -> Result<DataSource, ClarityError> {
    let catalog: AssetCatalog = load_fixture(source).await?;
    catalog
        .data_sources
        .into_iter()
        .find(|ds| ds.id == id)
        .ok_or_else(|| DomainError::DataSourceNotFound(id.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures::EmbeddedFixtures;
    use anyhow::Result;

    #[tokio::test]
    async fn test_type_filter_is_containment() -> Result<()> {
        let query = CatalogQuery {
            kind: Selector::value("postgres"),
            ..Default::default()
        };
        let page = load_catalog_page(&EmbeddedFixtures, &query).await?;
        let ids: Vec<&str> = page.sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ds-001", "ds-004"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_status_and_text_combined() -> Result<()> {
        let query = CatalogQuery {
            search: "catalog".into(),
            status: Selector::value("connected"),
            ..Default::default()
        };
        let page = load_catalog_page(&EmbeddedFixtures, &query).await?;
        assert_eq!(page.sources.len(), 1);
        assert_eq!(page.sources[0].id, "ds-003");
        assert_eq!(page.summary.total_data_sources, 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_data_source_details() -> Result<()> {
        let ds = load_data_source(&EmbeddedFixtures, "ds-004").await?;
        let unscored = ds
            .schemas
            .iter()
            .flat_map(|s| s.tables.iter())
            .find(|t| t.name == "monthly_revenue")
            .ok_or_else(|| anyhow::anyhow!("table missing"))?;
        assert!(unscored.quality_score.is_none());

        let res = load_data_source(&EmbeddedFixtures, "ds-999").await;
        assert!(matches!(
            res,
            Err(ClarityError::Domain(DomainError::DataSourceNotFound(_)))
        ));
        Ok(())
    }
}
