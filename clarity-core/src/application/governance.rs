// clarity-core/src/application/governance.rs

use tracing::debug;

use crate::domain::fixtures::GovernanceOverview;
use crate::error::ClarityError;

/// Governance has no fixture document; the page resolves immediately.
pub async fn load_governance_page() -> Result<GovernanceOverview, ClarityError> {
    debug!("Governance data is built in");
    Ok(GovernanceOverview::builtin())
}
