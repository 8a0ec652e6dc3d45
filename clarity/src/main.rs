// clarity/src/main.rs

mod cli;
mod commands;
mod render;

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use clarity_core::ClarityError;
use clarity_core::application::{AnomalyQuery, CatalogQuery, ExecutionQuery, IncidentQuery, RuleQuery};
use clarity_core::infrastructure::error::InfrastructureError;

use crate::cli::{Cli, Commands};
use crate::commands::{Dashboard, PageLoadFailed};

#[tokio::main]
async fn main() {
    // RUST_LOG=debug clarity overview to see fixture loads and latency
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        // The failed page state is already on screen.
        if err.downcast_ref::<PageLoadFailed>().is_none() {
            report(err);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let dash = Dashboard::connect(&cli.global)?;

    match cli.command {
        // --- USE CASE: OVERVIEW ---
        Commands::Overview => commands::overview::execute(&dash).await,

        // --- USE CASE: RULES ---
        Commands::Rules {
            search,
            status,
            database,
        } => {
            let query = RuleQuery {
                search,
                status,
                database,
            };
            commands::rules::execute(&dash, query).await
        }

        // --- USE CASE: EXECUTIONS ---
        Commands::Executions { search, status, id } => {
            let query = ExecutionQuery { search, status };
            commands::executions::execute(&dash, query, id).await
        }

        Commands::Profiling { database } => commands::profiling::execute(&dash, database).await,

        Commands::Catalog {
            search,
            kind,
            status,
            source,
        } => {
            let query = CatalogQuery {
                search,
                kind,
                status,
            };
            commands::catalog::execute(&dash, query, source).await
        }

        Commands::Incidents { search, severity } => {
            commands::incidents::execute(&dash, IncidentQuery { search, severity }).await
        }

        Commands::Lineage { format } => commands::lineage::execute(&dash, format).await,

        Commands::Anomalies { search, severity } => {
            commands::anomalies::execute(&dash, AnomalyQuery { search, severity }).await
        }

        Commands::Costs => commands::costs::execute(&dash).await,

        Commands::Governance => commands::governance::execute(&dash).await,

        // --- USE CASE: PATH NAVIGATION ---
        Commands::Open { path } => commands::open::execute(&dash, &path).await,

        // --- USE CASE: EXPORT ---
        Commands::Export { dataset, out } => commands::export::execute(&dash, dataset, out).await,
    }
}

/// Prints the error chain, plus code and help when the core provides them.
fn report(err: anyhow::Error) {
    eprintln!("❌ {:#}", err);
    let diagnostic: Option<&dyn Diagnostic> = match err.downcast_ref::<ClarityError>() {
        Some(e) => Some(e as &dyn Diagnostic),
        None => err
            .downcast_ref::<InfrastructureError>()
            .map(|e| e as &dyn Diagnostic),
    };
    if let Some(d) = diagnostic {
        if let Some(code) = d.code() {
            eprintln!("   code: {}", code);
        }
        if let Some(help) = d.help() {
            eprintln!("   help: {}", help);
        }
    }
}
