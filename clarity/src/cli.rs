// clarity/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use clarity_core::application::LineageFormat;
use clarity_core::domain::Selector;
use clarity_core::domain::fixtures::FixtureKind;

#[derive(Parser)]
#[command(name = "clarity")]
#[command(about = "Data quality observability dashboard in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Skip the simulated network latency
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Read <dataset>.json files from this directory instead of the bundled data
    #[arg(long, global = true, value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    /// Dashboard config file (default: ./clarity.yaml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Quality score, incidents and rules at a glance
    Overview,

    /// 📏 Lists data quality rules
    Rules {
        /// Matches name, description or database
        #[arg(long, short, default_value = "")]
        search: String,

        /// active | paused | all
        #[arg(long, default_value = "all")]
        status: Selector,

        /// Exact database name or all
        #[arg(long, default_value = "all")]
        database: Selector,
    },

    /// ⏱️ Rule executions, or the logs and metrics of one run
    Executions {
        /// Matches the rule name
        #[arg(long, short, default_value = "")]
        search: String,

        /// completed | running | failed | all
        #[arg(long, default_value = "all")]
        status: Selector,

        /// Show details of one execution (ex: "exec-1001")
        #[arg(long)]
        id: Option<String>,
    },

    /// 🔬 Profiling metrics, optionally drilled down into one database
    Profiling {
        /// Database name (exact)
        #[arg(long, short)]
        database: Option<String>,
    },

    /// 🗂️ Data source catalog
    Catalog {
        /// Matches name or description
        #[arg(long, short, default_value = "")]
        search: String,

        /// Source type, partial and case-insensitive (ex: "postgres")
        #[arg(long = "type", default_value = "all")]
        kind: Selector,

        /// connected | warning | error | all
        #[arg(long, default_value = "all")]
        status: Selector,

        /// Show schemas and tables of one data source (ex: "ds-001")
        #[arg(long)]
        source: Option<String>,
    },

    /// 🚨 Data quality incidents
    Incidents {
        /// Matches title or description
        #[arg(long, short, default_value = "")]
        search: String,

        /// critical | high | medium | low | all
        #[arg(long, default_value = "all")]
        severity: Selector,
    },

    /// 🔗 Lineage explorer
    Lineage {
        /// Print the whole graph instead of the page: mermaid | json
        #[arg(long)]
        format: Option<LineageFormat>,
    },

    /// 📈 Detected anomalies
    Anomalies {
        /// Matches title, description or category
        #[arg(long, short, default_value = "")]
        search: String,

        /// critical | high | medium | low | all
        #[arg(long, default_value = "all")]
        severity: Selector,
    },

    /// 💰 Cost overview and optimization recommendations
    Costs,

    /// 🛡️ Policies and data classification
    Governance,

    /// 🧭 Opens a page by path (ex: "/rules")
    Open { path: String },

    /// 💾 Writes a dataset as pretty JSON
    Export {
        /// rules | rule-executions | profiling | assets | incidents | lineage | anomalies | costs
        dataset: FixtureKind,

        /// Output file
        #[arg(long, short)]
        out: PathBuf,
    },
}
