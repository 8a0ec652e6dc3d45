// clarity-core/src/domain/settings.rs

use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::{Validate, ValidationError};

/// Upper bound for any configured delay.
pub const MAX_LATENCY_MS: u64 = 10_000;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Color,
    Plain,
}

/// Simulated network latency window, `[min, max)` milliseconds.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Validate)]
#[validate(schema(function = "validate_window"))]
pub struct LatencyConfig {
    #[serde(rename = "min-ms", default = "default_min_ms")]
    #[validate(range(max = 10000))]
    pub min_ms: u64,

    #[serde(rename = "max-ms", default = "default_max_ms")]
    #[validate(range(max = 10000))]
    pub max_ms: u64,
}

impl LatencyConfig {
    pub const DISABLED: LatencyConfig = LatencyConfig { min_ms: 0, max_ms: 0 };

    pub fn is_disabled(&self) -> bool {
        self.max_ms == 0
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn validate_window(cfg: &LatencyConfig) -> Result<(), ValidationError> {
    if cfg.min_ms > cfg.max_ms {
        return Err(ValidationError::new("latency_window")
            .with_message("min-ms must not exceed max-ms".into()));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct DashboardConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Directory holding `<dataset>.json` overrides. Bundled data when absent.
    #[serde(rename = "fixture-dir", default)]
    pub fixture_dir: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub latency: LatencyConfig,

    #[serde(default)]
    pub theme: Theme,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            fixture_dir: None,
            latency: LatencyConfig::default(),
            theme: Theme::default(),
        }
    }
}

fn default_name() -> String {
    "clarity".to_string()
}
fn default_min_ms() -> u64 {
    200
}
fn default_max_ms() -> u64 {
    700
}
