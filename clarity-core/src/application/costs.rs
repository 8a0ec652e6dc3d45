// clarity-core/src/application/costs.rs

use serde::Serialize;
use tracing::instrument;

use crate::domain::fixtures::{CostCategory, CostOverview, CostReport, OptimizationRecommendation};
use crate::error::ClarityError;
use crate::ports::{FixtureSource, load_fixture};

const TOP_RECOMMENDATIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: CostCategory,
    pub cost: f64,
    /// Percentage of the breakdown total, 0 when the total is 0.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostsPage {
    pub overview: CostOverview,
    pub breakdown: Vec<CategoryShare>,
    pub recommendations: Vec<OptimizationRecommendation>,
    /// Sum over every recommendation, not just the ones shown.
    pub total_savings: f64,
}

pub fn build_costs_page(report: CostReport) -> CostsPage {
    let total = report.breakdown.total();
    let breakdown = CostCategory::ALL
        .iter()
        .map(|&category| {
            let cost = report.breakdown.cost(category);
            let share = if total > 0.0 { cost / total * 100.0 } else { 0.0 };
            CategoryShare {
                category,
                cost,
                share,
            }
        })
        .collect();

    let total_savings = report
        .optimization_recommendations
        .iter()
        .map(|r| r.estimated_savings)
        .sum();

    CostsPage {
        overview: report.overview,
        breakdown,
        recommendations: report
            .optimization_recommendations
            .into_iter()
            .take(TOP_RECOMMENDATIONS)
            .collect(),
        total_savings,
    }
}

#[instrument(skip(source))]
pub async fn load_costs_page(source: &dyn FixtureSource) -> Result<CostsPage, ClarityError> {
    let report: CostReport = load_fixture(source).await?;
    Ok(build_costs_page(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fixtures::EmbeddedFixtures;
    use anyhow::Result;

    #[tokio::test]
    async fn test_breakdown_shares_sum_to_hundred() -> Result<()> {
        let page = load_costs_page(&EmbeddedFixtures).await?;
        assert_eq!(page.breakdown.len(), 4);
        let sum: f64 = page.breakdown.iter().map(|c| c.share).sum();
        assert!((sum - 100.0).abs() < 1e-6);
        assert_eq!(page.breakdown[0].category, CostCategory::Compute);
        Ok(())
    }

    #[tokio::test]
    async fn test_top_four_and_total_savings() -> Result<()> {
        let page = load_costs_page(&EmbeddedFixtures).await?;
        assert_eq!(page.recommendations.len(), 4);
        assert_eq!(page.recommendations[0].id, "opt-01");
        assert!((page.total_savings - 12300.5).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_empty_breakdown_has_zero_shares() {
        let report = CostReport {
            overview: CostOverview::default(),
            breakdown: Default::default(),
            optimization_recommendations: Vec::new(),
        };
        let page = build_costs_page(report);
        assert!(page.breakdown.iter().all(|c| c.share == 0.0));
        assert_eq!(page.total_savings, 0.0);
    }
}
