// clarity/src/commands/executions.rs

use clarity_core::application::{
    ExecutionQuery, ExecutionsPage, load_execution_details, load_executions_page,
};
use clarity_core::domain::Route;
use clarity_core::domain::fixtures::RuleExecution;
use clarity_core::domain::format::{
    execution_badge, format_date_time, format_number, format_percentage, log_level_badge,
    quality_color,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(
    dash: &Dashboard,
    query: ExecutionQuery,
    id: Option<String>,
) -> anyhow::Result<()> {
    let source = dash.source();
    match id {
        Some(id) => {
            dash.show(
                Route::Executions,
                async move { load_execution_details(source.as_ref(), &id).await },
                render_details,
            )
            .await
        }
        None => {
            dash.show(
                Route::Executions,
                async move { load_executions_page(source.as_ref(), &query).await },
                render,
            )
            .await
        }
    }
}

fn outcome(exec: &RuleExecution) -> String {
    match exec.result {
        Some(result) => format!("{} / {}", exec.status, result.as_str()),
        None => exec.status.to_string(),
    }
}

fn render(r: &Renderer, page: ExecutionsPage) {
    r.page_header(
        &Route::Executions,
        "Monitor rule execution history and performance",
    );
    r.cards(vec![
        ("Total Executions", r.cell(page.summary.total_executions)),
        (
            "Success Rate",
            r.token(
                format_percentage(page.success_rate),
                quality_color(page.success_rate),
            ),
        ),
        ("Failed", r.token(page.summary.failed, "text-destructive")),
        ("Avg Duration", r.cell(&page.summary.avg_duration)),
        (
            "Records Processed",
            r.cell(format_number(page.summary.total_records_processed as f64)),
        ),
    ]);

    if page.executions.is_empty() {
        r.empty("executions");
        return;
    }

    let mut table = r.table(vec![
        "ID", "Rule", "Started", "Duration", "Outcome", "Score", "Processed", "Passed", "Failed",
    ]);
    for exec in &page.executions {
        table.add_row(vec![
            r.cell(&exec.id),
            r.cell(&exec.rule_name),
            r.cell(format_date_time(&exec.execution_time)),
            r.cell(&exec.duration),
            r.badge(outcome(exec), execution_badge(exec.status, exec.result)),
            r.token(format_percentage(exec.score), quality_color(exec.score)),
            r.cell(format_number(exec.records_processed as f64)),
            r.cell(format_number(exec.records_passed as f64)),
            r.cell(format_number(exec.records_failed as f64)),
        ]);
    }
    println!("{table}");
}

fn render_details(r: &Renderer, exec: RuleExecution) {
    r.page_header(&Route::Executions, &format!("{} ({})", exec.rule_name, exec.id));
    r.cards(vec![
        (
            "Outcome",
            r.badge(outcome(&exec), execution_badge(exec.status, exec.result)),
        ),
        ("Started", r.cell(format_date_time(&exec.execution_time))),
        ("Duration", r.cell(&exec.duration)),
        ("CPU", r.cell(&exec.metrics.cpu_usage)),
        ("Memory", r.cell(&exec.metrics.memory_usage)),
        ("Network I/O", r.cell(&exec.metrics.network_io)),
    ]);

    r.section("Execution Logs");
    if exec.logs.is_empty() {
        println!("   No log lines recorded.");
        return;
    }
    let mut logs = r.table(vec!["Level", "Time", "Message"]);
    for line in &exec.logs {
        logs.add_row(vec![
            r.badge(line.level.as_str(), log_level_badge(line.level)),
            r.cell(format_date_time(&line.timestamp)),
            r.cell(&line.message),
        ]);
    }
    println!("{logs}");
}
