// clarity/src/commands/incidents.rs

use clarity_core::application::{IncidentQuery, IncidentsPage, load_incidents_page};
use clarity_core::domain::Route;
use clarity_core::domain::format::{
    format_relative_time, humanize_identifier, severity_color, status_color,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard, query: IncidentQuery) -> anyhow::Result<()> {
    let source = dash.source();
    dash.show(
        Route::Incidents,
        async move { load_incidents_page(source.as_ref(), &query).await },
        render,
    )
    .await
}

fn render(r: &Renderer, page: IncidentsPage) {
    r.page_header(&Route::Incidents, "Track and resolve data quality incidents");
    r.cards(vec![
        ("Total Incidents", r.cell(page.stats.total)),
        ("Open", r.token(page.stats.open, "text-accent")),
        ("In Progress", r.token(page.stats.in_progress, "text-warning")),
        ("Resolved", r.token(page.stats.resolved, "text-success")),
    ]);

    if page.incidents.is_empty() {
        r.empty("incidents");
        return;
    }

    let mut table = r.table(vec!["ID", "Title", "Severity", "Status", "Assignee", "Created"]);
    for incident in &page.incidents {
        table.add_row(vec![
            r.cell(&incident.id),
            r.cell(&incident.title),
            r.token(incident.severity.label(), severity_color(incident.severity.as_str())),
            r.token(
                humanize_identifier(incident.status.as_str()),
                status_color(incident.status.as_str()),
            ),
            r.cell(&incident.assignee),
            r.cell(format_relative_time(&incident.created_at)),
        ]);
    }
    println!("{table}");
}
