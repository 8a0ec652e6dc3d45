// clarity-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(clarity::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- FIXTURES ---
    #[error("Fixture '{fixture}' has an unexpected shape: {source}")]
    #[diagnostic(
        code(clarity::infra::fixture_shape),
        help("Field names are camelCase and must match the bundled fixtures.")
    )]
    FixtureShape {
        fixture: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fixture '{fixture}' not found at '{path}'")]
    #[diagnostic(
        code(clarity::infra::fixture_missing),
        help("Every dataset must exist as <name>.json in the fixture directory.")
    )]
    FixtureNotFound { fixture: String, path: String },

    #[error("JSON Error: {0}")]
    #[diagnostic(code(clarity::infra::json))]
    Json(#[from] serde_json::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(clarity::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(clarity::infra::config))]
    ConfigError(String),

    #[error("Dashboard configuration not found at '{0}'")]
    #[diagnostic(code(clarity::infra::config_missing))]
    ConfigNotFound(String),
}
