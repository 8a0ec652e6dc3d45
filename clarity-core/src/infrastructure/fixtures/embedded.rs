// clarity-core/src/infrastructure/fixtures/embedded.rs

use async_trait::async_trait;

use crate::domain::fixtures::FixtureKind;
use crate::error::ClarityError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::FixtureSource;

/// The eight documents compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFixtures;

impl EmbeddedFixtures {
    pub fn document(kind: FixtureKind) -> &'static str {
        match kind {
            FixtureKind::Rules => include_str!("../../../fixtures/rules.json"),
            FixtureKind::RuleExecutions => include_str!("../../../fixtures/ruleExecutions.json"),
            FixtureKind::Profiling => include_str!("../../../fixtures/profiling.json"),
            FixtureKind::Assets => include_str!("../../../fixtures/assets.json"),
            FixtureKind::Incidents => include_str!("../../../fixtures/incidents.json"),
            FixtureKind::Lineage => include_str!("../../../fixtures/lineage.json"),
            FixtureKind::Anomalies => include_str!("../../../fixtures/anomalies.json"),
            FixtureKind::Costs => include_str!("../../../fixtures/costs.json"),
        }
    }
}

#[async_trait]
impl FixtureSource for EmbeddedFixtures {
    async fn load_raw(&self, kind: FixtureKind) -> Result<serde_json::Value, ClarityError> {
        serde_json::from_str(Self::document(kind)).map_err(|e| {
            ClarityError::Infrastructure(InfrastructureError::FixtureShape {
                fixture: kind.to_string(),
                source: e,
            })
        })
    }
}
