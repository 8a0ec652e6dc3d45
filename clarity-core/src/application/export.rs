// clarity-core/src/application/export.rs

use std::path::Path;
use tracing::{info, instrument};

use crate::domain::fixtures::FixtureKind;
use crate::error::ClarityError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::FixtureSource;

/// Writes one dataset as pretty JSON. Returns the number of bytes written.
#[instrument(skip(source, out), fields(out = %out.display()))]
pub async fn export_fixture(
    source: &dyn FixtureSource,
    kind: FixtureKind,
    out: &Path,
) -> Result<usize, ClarityError> {
    let raw = source.load_raw(kind).await?;
    let content = serde_json::to_string_pretty(&raw)
        .map_err(|e| ClarityError::InternalError(e.to_string()))?;
    atomic_write(out, &content)?;
    info!(fixture = %kind, bytes = content.len(), "Dataset exported");
    Ok(content.len())
}
