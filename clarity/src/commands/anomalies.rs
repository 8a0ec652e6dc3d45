// clarity/src/commands/anomalies.rs

use clarity_core::application::{AnomaliesPage, AnomalyQuery, load_anomalies_page};
use clarity_core::domain::Route;
use clarity_core::domain::format::{
    format_percentage, format_relative_time, humanize_identifier, severity_color,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard, query: AnomalyQuery) -> anyhow::Result<()> {
    let source = dash.source();
    dash.show(
        Route::Anomalies,
        async move { load_anomalies_page(source.as_ref(), &query).await },
        render,
    )
    .await
}

fn render(r: &Renderer, page: AnomaliesPage) {
    r.page_header(
        &Route::Anomalies,
        "AI-powered detection of unusual patterns in your data",
    );
    let insights = &page.insights;
    let impact = &insights.impact_assessment;
    r.cards(vec![
        ("Total Anomalies", r.cell(insights.total_anomalies)),
        ("New Today", r.token(insights.new_today, "text-warning")),
        ("Resolved", r.token(insights.resolved, "text-success")),
        (
            "Avg Confidence",
            r.cell(format_percentage(insights.avg_confidence * 100.0)),
        ),
        (
            "Impact (high / medium / low)",
            r.cell(format!("{} / {} / {}", impact.high, impact.medium, impact.low)),
        ),
    ]);

    if page.anomalies.is_empty() {
        r.empty("anomalies");
        return;
    }

    let mut table = r.table(vec![
        "ID", "Anomaly", "Severity", "Confidence", "Category", "Detected", "Assignee",
    ]);
    for anomaly in &page.anomalies {
        table.add_row(vec![
            r.cell(&anomaly.id),
            r.cell(&anomaly.title),
            r.token(anomaly.severity.label(), severity_color(anomaly.severity.as_str())),
            r.cell(anomaly.confidence_percent()),
            r.cell(humanize_identifier(&anomaly.category)),
            r.cell(format_relative_time(&anomaly.detected_at)),
            r.cell(&anomaly.assignee),
        ]);
    }
    println!("{table}");

    for anomaly in page.anomalies.iter().filter(|a| !a.suggested_actions.is_empty()) {
        r.section(&format!("{}: suggested actions", anomaly.id));
        for action in &anomaly.suggested_actions {
            println!("   • {}", action);
        }
    }
}
