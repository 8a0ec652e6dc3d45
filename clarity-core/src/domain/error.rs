// clarity-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Unknown dataset '{0}'")]
    #[diagnostic(
        code(clarity::domain::unknown_fixture),
        help(
            "Valid datasets: rules, ruleExecutions, profiling, assets, incidents, lineage, anomalies, costs."
        )
    )]
    UnknownFixture(String),

    #[error("Database '{0}' not found in profiling data")]
    #[diagnostic(
        code(clarity::domain::database_not_found),
        help("Run `clarity profiling` without --database to list profiled databases.")
    )]
    DatabaseNotFound(String),

    #[error("Data source '{0}' not found in the asset catalog")]
    #[diagnostic(
        code(clarity::domain::data_source_not_found),
        help("Run `clarity catalog` to list data source ids.")
    )]
    DataSourceNotFound(String),

    #[error("Execution '{0}' not found")]
    #[diagnostic(code(clarity::domain::execution_not_found))]
    ExecutionNotFound(String),

    #[error("Unknown output format '{0}'")]
    #[diagnostic(code(clarity::domain::format), help("Use 'mermaid' or 'json'."))]
    UnknownFormat(String),
}
