// clarity-core/src/infrastructure/fixtures/mod.rs

pub mod directory;
pub mod embedded;
pub mod latency;

pub use directory::DirectoryFixtures;
pub use embedded::EmbeddedFixtures;
pub use latency::SimulatedLatency;

use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::domain::settings::DashboardConfig;
use crate::ports::FixtureSource;

/// Builds the source the pages read from: bundled or on-disk documents,
/// wrapped in the configured simulated latency.
///
/// A relative `fixture-dir` is resolved against `project_dir`.
pub fn build_source(config: &DashboardConfig, project_dir: &Path) -> Arc<dyn FixtureSource> {
    let latency = config.latency;
    match &config.fixture_dir {
        Some(dir) => {
            let root = project_dir.join(dir);
            info!(dir = ?root, "Reading fixtures from directory");
            Arc::new(SimulatedLatency::new(DirectoryFixtures::new(root), latency))
        }
        None => Arc::new(SimulatedLatency::new(EmbeddedFixtures, latency)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{FixtureKind, RuleCatalog};
    use crate::domain::settings::LatencyConfig;
    use crate::ports::load_fixture;
    use anyhow::Result;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_default_config_reads_bundled_data() -> Result<()> {
        let config = DashboardConfig {
            latency: LatencyConfig::DISABLED,
            ..Default::default()
        };
        let source = build_source(&config, Path::new("."));
        let catalog: RuleCatalog = load_fixture(source.as_ref()).await?;
        assert_eq!(catalog.rules.len(), 8);
        Ok(())
    }

    #[tokio::test]
    async fn test_fixture_dir_is_relative_to_project() -> Result<()> {
        let project = tempdir()?;
        std::fs::create_dir(project.path().join("data"))?;
        std::fs::write(
            project.path().join("data").join("lineage.json"),
            r#"{"nodes":[],"edges":[],"metadata":{"totalNodes":0,"sourceSystems":0,"transformations":0,"visualizations":0}}"#,
        )?;
        let config = DashboardConfig {
            fixture_dir: Some("data".into()),
            latency: LatencyConfig::DISABLED,
            ..Default::default()
        };
        let source = build_source(&config, project.path());
        let raw = source.load_raw(FixtureKind::Lineage).await?;
        assert_eq!(raw["metadata"]["totalNodes"], 0);
        Ok(())
    }
}
