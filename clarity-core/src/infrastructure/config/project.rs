// clarity-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::domain::settings::{DashboardConfig, LatencyConfig};
use crate::infrastructure::error::InfrastructureError;

const CANDIDATES: [&str; 2] = ["clarity_project_conf.yaml", "clarity.yaml"];

// --- LOADERS ---

/// Loads the dashboard config from `project_dir`, falling back to defaults
/// when no config file exists, then layers environment overrides on top.
#[instrument(skip(project_dir))]
pub fn load_dashboard_config(project_dir: &Path) -> Result<DashboardConfig, InfrastructureError> {
    // Layering: VAR=... clarity rules
    load_with_env(project_dir, |key| std::env::var(key).ok())
}

fn load_with_env<F>(project_dir: &Path, lookup: F) -> Result<DashboardConfig, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match find_main_config(project_dir) {
        Some(path) => read_config(&path)?,
        None => {
            debug!(dir = ?project_dir, "No dashboard config found, using defaults");
            DashboardConfig::default()
        }
    };
    apply_env_overrides(&mut config, lookup)?;
    validate(&config)?;
    Ok(config)
}

/// Loads an explicitly named config file. Missing file is an error here.
pub fn load_config_file(path: &Path) -> Result<DashboardConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    let mut config = read_config(path)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

fn find_main_config(root: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn read_config(path: &Path) -> Result<DashboardConfig, InfrastructureError> {
    info!(path = ?path, "Loading dashboard config");
    let content = fs::read_to_string(path)?;
    let config: DashboardConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

fn validate(config: &DashboardConfig) -> Result<(), InfrastructureError> {
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
}

// --- ENV OVERRIDES ---

/// `CLARITY_FIXTURE_DIR`, `CLARITY_LATENCY_MS` (`min-max` or a single value)
/// and `CLARITY_NO_LATENCY`. `lookup` abstracts the environment.
pub fn apply_env_overrides<F>(config: &mut DashboardConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("CLARITY_FIXTURE_DIR").filter(|v| !v.trim().is_empty()) {
        info!(old = ?config.fixture_dir, new = ?dir, "Overriding fixture dir via ENV");
        config.fixture_dir = Some(dir);
    }

    if let Some(raw) = lookup("CLARITY_LATENCY_MS") {
        let latency = parse_latency(&raw)?;
        info!(?latency, "Overriding latency via ENV");
        config.latency = latency;
    }

    if let Some(flag) = lookup("CLARITY_NO_LATENCY") {
        if is_truthy(&flag) {
            info!("Latency disabled via ENV");
            config.latency = LatencyConfig::DISABLED;
        }
    }

    Ok(())
}

fn parse_latency(raw: &str) -> Result<LatencyConfig, InfrastructureError> {
    let invalid = || {
        InfrastructureError::ConfigError(format!(
            "CLARITY_LATENCY_MS must be '<ms>' or '<min>-<max>', got '{}'",
            raw
        ))
    };
    let parse = |s: &str| s.trim().parse::<u64>().map_err(|_| invalid());

    match raw.split_once('-') {
        Some((min, max)) => Ok(LatencyConfig {
            min_ms: parse(min)?,
            max_ms: parse(max)?,
        }),
        None => {
            let fixed = parse(raw)?;
            Ok(LatencyConfig {
                min_ms: fixed,
                max_ms: fixed,
            })
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
