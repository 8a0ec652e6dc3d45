// clarity-core/src/infrastructure/fixtures/directory.rs

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::domain::fixtures::FixtureKind;
use crate::error::ClarityError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::FixtureSource;

/// Reads `<dir>/<dataset>.json` on every load. Nothing is cached.
#[derive(Debug, Clone)]
pub struct DirectoryFixtures {
    root: PathBuf,
}

impl DirectoryFixtures {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, kind: FixtureKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

#[async_trait]
impl FixtureSource for DirectoryFixtures {
    #[instrument(skip(self), fields(root = ?self.root))]
    async fn load_raw(&self, kind: FixtureKind) -> Result<serde_json::Value, ClarityError> {
        let path = self.path_for(kind);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(InfrastructureError::FixtureNotFound {
                    fixture: kind.to_string(),
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(e) => return Err(e.into()),
        };
        debug!(path = ?path, bytes = content.len(), "Fixture read");

        serde_json::from_str(&content).map_err(|e| {
            ClarityError::Infrastructure(InfrastructureError::FixtureShape {
                fixture: kind.to_string(),
                source: e,
            })
        })
    }
}
