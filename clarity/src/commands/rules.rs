// clarity/src/commands/rules.rs

use clarity_core::application::{RuleQuery, RulesPage, load_rules_page};
use clarity_core::domain::Route;
use clarity_core::domain::format::{
    format_percentage, format_relative_time, humanize_identifier, quality_color, status_color,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard, query: RuleQuery) -> anyhow::Result<()> {
    let source = dash.source();
    dash.show(
        Route::Rules,
        async move { load_rules_page(source.as_ref(), &query).await },
        render,
    )
    .await
}

fn render(r: &Renderer, page: RulesPage) {
    r.page_header(&Route::Rules, "Create and manage data quality rules");
    r.cards(vec![
        ("Total Rules", r.cell(page.total_rules)),
        ("Active Rules", r.token(page.active_rules, "text-success")),
        ("Databases", r.cell(page.databases.join(", "))),
        (
            "Rule Types",
            r.cell(
                page.rule_types
                    .iter()
                    .map(|t| humanize_identifier(t))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        ),
    ]);

    if page.rules.is_empty() {
        r.empty("rules");
        return;
    }

    let mut table = r.table(vec![
        "Rule", "Database", "Table", "Type", "Status", "Score", "Threshold", "Trend", "Schedule",
        "Last Run",
    ]);
    for rule in &page.rules {
        table.add_row(vec![
            r.cell(&rule.name),
            r.cell(&rule.database),
            r.cell(rule.qualified_table()),
            r.cell(humanize_identifier(&rule.rule_type)),
            r.token(rule.status, status_color(rule.status.as_str())),
            r.token(
                format_percentage(rule.current_score),
                quality_color(rule.current_score),
            ),
            r.cell(format_percentage(rule.threshold)),
            r.cell(rule.trend.arrow()),
            r.cell(rule.schedule.as_str()),
            r.cell(format_relative_time(&rule.last_run)),
        ]);
    }
    println!("{table}");
    println!("   {} of {} rules shown", page.rules.len(), page.total_rules);
}
