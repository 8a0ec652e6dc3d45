// clarity/src/commands/mod.rs

pub mod anomalies;
pub mod catalog;
pub mod costs;
pub mod executions;
pub mod export;
pub mod governance;
pub mod incidents;
pub mod lineage;
pub mod open;
pub mod overview;
pub mod profiling;
pub mod rules;

use anyhow::Context;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clarity_core::ClarityError;
use clarity_core::application::spawn_view_load;
use clarity_core::domain::{Route, ViewState};
use clarity_core::infrastructure::config::{
    DashboardConfig, LatencyConfig, Theme, load_config_file, load_dashboard_config,
};
use clarity_core::infrastructure::fixtures::build_source;
use clarity_core::ports::FixtureSource;

use crate::cli::GlobalArgs;
use crate::render::Renderer;

/// A page ended in its failed state. Already shown to the user.
#[derive(Debug, thiserror::Error)]
#[error("Could not load {page}: {reason}")]
pub struct PageLoadFailed {
    pub page: &'static str,
    pub reason: String,
}

/// Everything a page needs: where fixtures come from and how to draw.
pub struct Dashboard {
    pub config: DashboardConfig,
    pub source: Arc<dyn FixtureSource>,
    pub renderer: Renderer,
}

impl Dashboard {
    /// Config file, then ENV, then CLI flags.
    pub fn connect(global: &GlobalArgs) -> anyhow::Result<Self> {
        let (mut config, project_dir) = match &global.config {
            Some(path) => {
                let config = load_config_file(path).with_context(|| {
                    format!("Failed to load dashboard configuration from {:?}", path)
                })?;
                let dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (config, dir)
            }
            None => (load_dashboard_config(Path::new("."))?, PathBuf::from(".")),
        };

        if let Some(dir) = &global.fixtures {
            let absolute = std::env::current_dir()?.join(dir);
            config.fixture_dir = Some(absolute.display().to_string());
        }
        if global.no_delay {
            config.latency = LatencyConfig::DISABLED;
        }
        if global.plain {
            config.theme = Theme::Plain;
        }

        tracing::debug!(?config, "Dashboard configuration resolved");
        let source = build_source(&config, &project_dir);
        let renderer = Renderer::new(config.theme);
        Ok(Self {
            config,
            source,
            renderer,
        })
    }

    pub fn source(&self) -> Arc<dyn FixtureSource> {
        Arc::clone(&self.source)
    }

    /// Loads a page in the background, shows the loading state, then either
    /// renders the data or the "could not load" state, returned as
    /// `PageLoadFailed`.
    pub async fn show<T, F, R>(&self, route: Route, load: F, render: R) -> anyhow::Result<()>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ClarityError>> + Send + 'static,
        R: FnOnce(&Renderer, T),
    {
        tracing::info!(project = %self.config.name, page = route.path(), "Opening page");
        self.renderer.loading(&route);
        let pending = spawn_view_load(route.title(), load);

        match pending.wait().await {
            ViewState::Ready(data) => {
                render(&self.renderer, data);
                Ok(())
            }
            ViewState::Failed(reason) => {
                self.renderer.could_not_load(&route, &reason);
                Err(PageLoadFailed {
                    page: route.title(),
                    reason,
                }
                .into())
            }
            other => anyhow::bail!("{} view ended in state '{}'", route.title(), other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clarity_core::application::{IncidentQuery, load_incidents_page};
    use clarity_core::infrastructure::fixtures::{DirectoryFixtures, EmbeddedFixtures};

    fn dashboard(source: Arc<dyn FixtureSource>) -> Dashboard {
        Dashboard {
            config: DashboardConfig::default(),
            source,
            renderer: Renderer::new(Theme::Plain),
        }
    }

    #[tokio::test]
    async fn test_failed_page_is_returned_not_exited() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let dash = dashboard(Arc::new(DirectoryFixtures::new(dir.path())));
        let source = dash.source();

        let res = dash
            .show(
                Route::Incidents,
                async move { load_incidents_page(source.as_ref(), &IncidentQuery::default()).await },
                |_, _| {},
            )
            .await;

        match res {
            Err(err) => match err.downcast_ref::<PageLoadFailed>() {
                Some(failed) => {
                    assert_eq!(failed.page, "Incident Management");
                    assert!(failed.reason.contains("incidents"));
                    Ok(())
                }
                None => bail!("Expected PageLoadFailed, got {:#}", err),
            },
            Ok(()) => bail!("Expected the page to fail"),
        }
    }

    #[tokio::test]
    async fn test_ready_page_is_rendered() -> Result<()> {
        let dash = dashboard(Arc::new(EmbeddedFixtures));
        let source = dash.source();
        let mut seen = 0;

        dash.show(
            Route::Incidents,
            async move { load_incidents_page(source.as_ref(), &IncidentQuery::default()).await },
            |_, page| seen = page.incidents.len(),
        )
        .await?;

        assert_eq!(seen, 7);
        Ok(())
    }
}
