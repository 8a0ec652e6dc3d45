// clarity/src/commands/profiling.rs

use clarity_core::application::{ProfilingPage, load_profiling_page};
use clarity_core::domain::Route;
use clarity_core::domain::fixtures::ProfiledDatabase;
use clarity_core::domain::format::{
    QualityTier, format_date_time, format_number, format_percentage, format_short_date,
    quality_badge_variant, quality_color,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard, database: Option<String>) -> anyhow::Result<()> {
    let source = dash.source();
    dash.show(
        Route::Profiling,
        async move { load_profiling_page(source.as_ref(), database.as_deref()).await },
        render,
    )
    .await
}

fn render(r: &Renderer, page: ProfilingPage) {
    r.page_header(
        &Route::Profiling,
        &format!("Last updated {}", format_date_time(&page.last_updated)),
    );
    r.cards(vec![
        (
            "Overall Score",
            r.token(
                format_percentage(page.overall_score),
                quality_color(page.overall_score),
            ),
        ),
        ("Tables", r.cell(format_number(page.total_tables as f64))),
        ("Columns", r.cell(format_number(page.total_columns as f64))),
        ("Records", r.cell(format_number(page.total_records as f64))),
    ]);

    r.section("Quality Dimensions");
    let mut metrics = r.table(vec!["Dimension", "Score", "Rating"]);
    for (name, score) in &page.metrics {
        metrics.add_row(vec![
            r.cell(name),
            r.token(format_percentage(*score), quality_color(*score)),
            r.badge(
                QualityTier::from_score(*score).label(),
                quality_badge_variant(*score),
            ),
        ]);
    }
    println!("{metrics}");

    r.section("Trend");
    let mut trend = r.table(vec!["Date", "Overall"]);
    for point in &page.trend {
        trend.add_row(vec![
            r.cell(format_short_date(&point.date)),
            r.token(format_percentage(point.overall), quality_color(point.overall)),
        ]);
    }
    println!("{trend}");

    r.section("Databases");
    let mut databases = r.table(vec!["Database", "Score", "Trend", "Records", "Schemas"]);
    for db in &page.databases {
        databases.add_row(vec![
            r.cell(&db.name),
            r.token(format_percentage(db.score), quality_color(db.score)),
            r.cell(db.trend.arrow()),
            r.cell(format_number(db.record_count as f64)),
            r.cell(db.schemas.len()),
        ]);
    }
    println!("{databases}");

    if let Some(db) = &page.selected {
        render_drill_down(r, db);
    }
}

fn render_drill_down(r: &Renderer, db: &ProfiledDatabase) {
    for schema in &db.schemas {
        r.section(&format!(
            "{}.{} ({}, {} records)",
            db.name,
            schema.name,
            format_percentage(schema.score),
            format_number(schema.record_count as f64)
        ));
        let mut tables = r.table(vec![
            "Table",
            "Score",
            "Records",
            "Completeness",
            "Uniqueness",
            "Validity",
            "Freshness",
            "Issues",
        ]);
        for table in &schema.tables {
            tables.add_row(vec![
                r.cell(&table.name),
                r.token(format_percentage(table.score), quality_color(table.score)),
                r.cell(format_number(table.record_count as f64)),
                r.cell(format_percentage(table.completeness)),
                r.cell(format_percentage(table.uniqueness)),
                r.cell(format_percentage(table.validity)),
                r.cell(format_percentage(table.freshness)),
                r.cell(table.issue_count()),
            ]);
        }
        println!("{tables}");

        let flagged: Vec<_> = schema
            .tables
            .iter()
            .flat_map(|t| t.columns.iter().map(move |c| (t, c)))
            .filter(|(_, c)| !c.issues.is_empty())
            .collect();
        if flagged.is_empty() {
            continue;
        }
        let mut columns = r.table(vec!["Column", "Type", "Nulls", "Issues"]);
        for (table, column) in flagged {
            columns.add_row(vec![
                r.cell(format!("{}.{}", table.name, column.name)),
                r.cell(&column.data_type),
                r.cell(format_percentage(column.null_percentage)),
                r.token(column.issues.join(", "), "text-warning"),
            ]);
        }
        println!("{columns}");
    }
}
