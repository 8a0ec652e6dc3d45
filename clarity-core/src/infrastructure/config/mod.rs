// clarity-core/src/infrastructure/config/mod.rs

pub mod project;

pub use crate::domain::settings::{DashboardConfig, LatencyConfig, Theme};
pub use project::{apply_env_overrides, load_config_file, load_dashboard_config};
