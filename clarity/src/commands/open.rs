// clarity/src/commands/open.rs
//
// USE CASE: Path-based navigation, including the not-found page.

use tracing::error;

use clarity_core::domain::Route;

use super::{
    Dashboard, anomalies, catalog, costs, executions, governance, incidents, lineage, overview,
    profiling, rules,
};

pub async fn execute(dash: &Dashboard, path: &str) -> anyhow::Result<()> {
    match Route::parse(path) {
        Route::Overview => overview::execute(dash).await,
        Route::Rules => rules::execute(dash, Default::default()).await,
        Route::Executions => executions::execute(dash, Default::default(), None).await,
        Route::Profiling => profiling::execute(dash, None).await,
        Route::Catalog => catalog::execute(dash, Default::default(), None).await,
        Route::Incidents => incidents::execute(dash, Default::default()).await,
        Route::Lineage => lineage::execute(dash, None).await,
        Route::Anomalies => anomalies::execute(dash, Default::default()).await,
        Route::Costs => costs::execute(dash).await,
        Route::Governance => governance::execute(dash).await,
        not_found @ Route::NotFound(_) => {
            render_not_found(&not_found);
            Ok(())
        }
    }
}

fn render_not_found(route: &Route) {
    error!(
        "404 Error: User attempted to access non-existent route: {}",
        route.path()
    );
    println!("\n404 - {}", route.title());
    println!("Oops! Nothing lives at '{}'.", route.path());
    println!("Pages:");
    for page in Route::PAGES {
        println!("   {:<12} {}", page.path(), page.title());
    }
}
