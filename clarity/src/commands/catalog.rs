// clarity/src/commands/catalog.rs

use clarity_core::application::{CatalogPage, CatalogQuery, load_catalog_page, load_data_source};
use clarity_core::domain::Route;
use clarity_core::domain::fixtures::DataSource;
use clarity_core::domain::format::{
    format_number, format_percentage, format_relative_time, quality_color, status_color,
    table_quality_badge,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(
    dash: &Dashboard,
    query: CatalogQuery,
    source_id: Option<String>,
) -> anyhow::Result<()> {
    let source = dash.source();
    match source_id {
        Some(id) => {
            dash.show(
                Route::Catalog,
                async move { load_data_source(source.as_ref(), &id).await },
                render_source,
            )
            .await
        }
        None => {
            dash.show(
                Route::Catalog,
                async move { load_catalog_page(source.as_ref(), &query).await },
                render,
            )
            .await
        }
    }
}

fn render(r: &Renderer, page: CatalogPage) {
    r.page_header(&Route::Catalog, "Discover and explore your data assets");
    let summary = &page.summary;
    r.cards(vec![
        (
            "Data Sources",
            r.cell(format!(
                "{} ({} connected)",
                summary.total_data_sources, summary.connected_sources
            )),
        ),
        ("Tables", r.cell(format_number(summary.total_tables as f64))),
        ("Records", r.cell(format_number(summary.total_records as f64))),
        ("Data Volume", r.cell(&summary.total_data_volume)),
        (
            "Avg Connection Health",
            r.token(
                format_percentage(summary.avg_connection_health),
                quality_color(summary.avg_connection_health),
            ),
        ),
    ]);

    if page.sources.is_empty() {
        r.empty("data sources");
        return;
    }

    let mut table = r.table(vec![
        "ID", "Name", "Type", "Status", "Environment", "Health", "Last Sync", "Owner", "Tags",
    ]);
    for ds in &page.sources {
        table.add_row(vec![
            r.cell(&ds.id),
            r.cell(&ds.name),
            r.cell(&ds.kind),
            r.token(ds.status.as_str(), status_color(ds.status.as_str())),
            r.cell(&ds.environment),
            r.token(
                format_percentage(ds.connection_health),
                quality_color(ds.connection_health),
            ),
            r.cell(format_relative_time(&ds.last_synced)),
            r.cell(&ds.owner),
            r.cell(ds.tags.join(", ")),
        ]);
    }
    println!("{table}");
}

fn render_source(r: &Renderer, ds: DataSource) {
    r.page_header(&Route::Catalog, &format!("{} ({})", ds.name, ds.kind));
    println!("{}", ds.description);

    for schema in &ds.schemas {
        r.section(&format!("{} ({} tables)", schema.name, schema.table_count));
        if !schema.description.is_empty() {
            println!("{}", schema.description);
        }
        let mut table = r.table(vec![
            "Table", "Description", "Owner", "Records", "Columns", "Volume", "Quality", "Updated",
        ]);
        for t in &schema.tables {
            let quality = match t.quality_score {
                Some(score) => r.badge(format_percentage(score), table_quality_badge(score)),
                None => r.token("N/A", "text-muted-foreground"),
            };
            table.add_row(vec![
                r.cell(&t.name),
                r.cell(&t.description),
                r.cell(&t.owner),
                r.cell(format_number(t.record_count as f64)),
                r.cell(t.column_count),
                r.cell(&t.data_volume),
                quality,
                r.cell(format_relative_time(&t.last_updated)),
            ]);
        }
        println!("{table}");
    }
}
