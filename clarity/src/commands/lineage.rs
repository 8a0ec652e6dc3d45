// clarity/src/commands/lineage.rs
//
// USE CASE: Lineage explorer page, or the whole graph as Mermaid / JSON.

use clarity_core::application::{LineageFormat, LineagePage, export_lineage, load_lineage_page};
use clarity_core::domain::Route;
use clarity_core::domain::format::humanize_identifier;

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard, format: Option<LineageFormat>) -> anyhow::Result<()> {
    let source = dash.source();
    match format {
        Some(format) => {
            dash.show(
                Route::Lineage,
                async move { export_lineage(source.as_ref(), format).await },
                |_, text| println!("{}", text),
            )
            .await
        }
        None => {
            dash.show(
                Route::Lineage,
                async move { load_lineage_page(source.as_ref()).await },
                render,
            )
            .await
        }
    }
}

fn render(r: &Renderer, page: LineagePage) {
    r.page_header(
        &Route::Lineage,
        "Visualize data flow and dependencies across your data ecosystem",
    );
    let meta = &page.metadata;
    r.cards(vec![
        ("Total Nodes", r.cell(meta.total_nodes)),
        ("Source Systems", r.cell(meta.source_systems)),
        ("Transformations", r.cell(meta.transformations)),
        ("Visualizations", r.cell(meta.visualizations)),
    ]);

    r.section("Key Nodes");
    let mut nodes = r.table(vec!["Node", "Type", "Category", "Description"]);
    for node in &page.key_nodes {
        nodes.add_row(vec![
            r.cell(&node.name),
            r.cell(humanize_identifier(node.kind.as_str())),
            r.cell(&node.category),
            r.cell(&node.description),
        ]);
    }
    println!("{nodes}");

    r.section("Data Flow");
    for edge in &page.edges {
        println!("   {} → {}", edge.source, edge.target);
    }

    r.section("Pipeline Health");
    let mut health = r.table(vec!["Stage", "Status"]);
    for stage in &page.pipeline {
        health.add_row(vec![
            r.cell(stage.name),
            r.badge(stage.status.label(), stage.status.badge()),
        ]);
    }
    println!("{health}");
    println!("   Export the full graph with `clarity lineage --format mermaid`.");
}
