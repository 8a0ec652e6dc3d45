// clarity-core/src/application/rules.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::filter::{Filter, Selector};
use crate::domain::fixtures::{QualityRule, RuleCatalog};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

/// Search box plus the status and database dropdowns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleQuery {
    pub search: String,
    pub status: Selector,
    pub database: Selector,
}

impl RuleQuery {
    pub fn filter(&self) -> Filter {
        Filter::new(self.search.clone())
            .equals("status", self.status.clone())
            .equals("database", self.database.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulesPage {
    pub total_rules: usize,
    pub active_rules: usize,
    pub rules: Vec<QualityRule>,
    pub databases: Vec<String>,
    pub rule_types: Vec<String>,
}

pub fn build_rules_page(catalog: RuleCatalog, query: &RuleQuery) -> RulesPage {
    let filter = query.filter();
    let rules = filter.apply(&catalog.rules).into_iter().cloned().collect();
    RulesPage {
        total_rules: catalog.rules.len(),
        active_rules: catalog.active_count(),
        rules,
        databases: catalog.databases.into_iter().map(|d| d.name).collect(),
        rule_types: catalog.rule_types,
    }
}

#[instrument(skip(source))]
pub async fn load_rules_page(
    source: &dyn FixtureSource,
    query: &RuleQuery,
) -> Result<RulesPage, ClarityError> {
    let catalog: RuleCatalog = load_fixture(source).await?;
    Ok(build_rules_page(catalog, query))
}
