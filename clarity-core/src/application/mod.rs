// clarity-core/src/application/mod.rs

pub mod anomalies;
pub mod catalog;
pub mod costs;
pub mod executions;
pub mod export;
pub mod governance;
pub mod incidents;
pub mod lineage;
pub mod loader;
pub mod overview;
pub mod profiling;
pub mod rules;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI imports page use cases from here without knowing the file layout.

pub use anomalies::{AnomaliesPage, AnomalyQuery, load_anomalies_page};
pub use catalog::{CatalogPage, CatalogQuery, load_catalog_page, load_data_source};
pub use costs::{CategoryShare, CostsPage, load_costs_page};
pub use executions::{
    ExecutionQuery, ExecutionsPage, find_execution, load_execution_details, load_executions_page,
};
pub use export::export_fixture;
pub use governance::load_governance_page;
pub use incidents::{IncidentQuery, IncidentsPage, load_incidents_page};
pub use lineage::{
    LineageFormat, LineagePage, PipelineStage, PipelineStatus, export_lineage, load_lineage_page,
    pipeline_health,
};
pub use loader::{PendingView, load_view, spawn_view_load};
pub use overview::{OverviewPage, load_overview};
pub use profiling::{ProfilingPage, TrendPoint, load_profiling_page};
pub use rules::{RuleQuery, RulesPage, load_rules_page};
