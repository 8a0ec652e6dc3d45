// clarity/src/commands/overview.rs
//
// USE CASE: Landing page, three datasets joined.

use clarity_core::application::{OverviewPage, load_overview};
use clarity_core::domain::Route;
use clarity_core::domain::format::{
    format_number, format_percentage, format_relative_time, format_short_date,
    quality_badge_variant, quality_color, severity_color, status_color,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard) -> anyhow::Result<()> {
    let source = dash.source();
    dash.show(
        Route::Overview,
        async move { load_overview(source.as_ref()).await },
        render,
    )
    .await
}

fn render(r: &Renderer, page: OverviewPage) {
    r.page_header(
        &Route::Overview,
        "Monitor your data quality metrics and incidents",
    );

    r.cards(vec![
        (
            "Overall Quality Score",
            r.token(
                format_percentage(page.overall_score),
                quality_color(page.overall_score),
            ),
        ),
        (
            "Active Rules",
            r.cell(format!(
                "{} ({} total rules configured)",
                page.active_rules, page.total_rules
            )),
        ),
        (
            "Open Incidents",
            r.token(
                format!(
                    "{} ({} total incidents)",
                    format_number(page.open_incidents as f64),
                    format_number(page.total_incidents as f64)
                ),
                "text-warning",
            ),
        ),
        (
            "Data Records",
            r.cell(format!(
                "{} across {} tables",
                format_number(page.total_records as f64),
                page.total_tables
            )),
        ),
    ]);

    r.section("Quality Trends");
    let mut trend = r.table(vec![
        "Date",
        "Overall",
        "Completeness",
        "Uniqueness",
        "Validity",
        "Freshness",
    ]);
    for day in &page.trend {
        trend.add_row(vec![
            r.cell(format_short_date(&day.date)),
            r.token(format_percentage(day.overall), quality_color(day.overall)),
            r.cell(format_percentage(day.completeness)),
            r.cell(format_percentage(day.uniqueness)),
            r.cell(format_percentage(day.validity)),
            r.cell(format_percentage(day.freshness)),
        ]);
    }
    println!("{trend}");

    r.section("Incident Severity");
    let mut severity = r.table(vec!["Severity", "Incidents"]);
    for (level, count) in &page.severity_distribution {
        severity.add_row(vec![
            r.token(level.label(), severity_color(level.as_str())),
            r.cell(count),
        ]);
    }
    println!("{severity}");

    r.section("Recent Incidents");
    let mut incidents = r.table(vec!["ID", "Title", "Severity", "Status", "Created"]);
    for incident in &page.recent_incidents {
        incidents.add_row(vec![
            r.cell(&incident.id),
            r.cell(&incident.title),
            r.token(incident.severity, severity_color(incident.severity.as_str())),
            r.token(
                incident.status.as_str(),
                status_color(incident.status.as_str()),
            ),
            r.cell(format_relative_time(&incident.created_at)),
        ]);
    }
    println!("{incidents}");

    r.section("Quality Rules");
    let mut rules = r.table(vec!["Rule", "Database", "Score", "Status"]);
    for rule in &page.rules {
        rules.add_row(vec![
            r.cell(&rule.name),
            r.cell(&rule.database),
            r.badge(
                format_percentage(rule.current_score),
                quality_badge_variant(rule.current_score),
            ),
            r.token(rule.status, status_color(rule.status.as_str())),
        ]);
    }
    println!("{rules}");
}
