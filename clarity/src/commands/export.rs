// clarity/src/commands/export.rs
//
// USE CASE: Save a dataset to disk (atomic write).

use anyhow::Context;
use std::path::PathBuf;

use clarity_core::application::export_fixture;
use clarity_core::domain::fixtures::FixtureKind;

use super::Dashboard;

pub async fn execute(dash: &Dashboard, dataset: FixtureKind, out: PathBuf) -> anyhow::Result<()> {
    let bytes = export_fixture(dash.source.as_ref(), dataset, &out)
        .await
        .with_context(|| format!("Failed to export {} to {}", dataset, out.display()))?;
    println!("💾 Exported {} ({} bytes) to {}", dataset, bytes, out.display());
    Ok(())
}
