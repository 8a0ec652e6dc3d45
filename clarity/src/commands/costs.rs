// clarity/src/commands/costs.rs

use clarity_core::application::{CostsPage, load_costs_page};
use clarity_core::domain::Route;
use clarity_core::domain::fixtures::Priority;
use clarity_core::domain::format::{format_currency, format_percentage, quality_color};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard) -> anyhow::Result<()> {
    let source = dash.source();
    dash.show(
        Route::Costs,
        async move { load_costs_page(source.as_ref()).await },
        render,
    )
    .await
}

fn priority_token(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "text-destructive",
        Priority::Medium => "text-warning",
        Priority::Low => "text-muted-foreground",
    }
}

fn render(r: &Renderer, page: CostsPage) {
    r.page_header(
        &Route::Costs,
        "Monitor and optimize your data infrastructure costs",
    );
    let o = &page.overview;
    let change_token = if o.change_percentage > 0.0 {
        "text-destructive"
    } else {
        "text-success"
    };
    r.cards(vec![
        ("Total Monthly Cost", r.cell(format_currency(o.total_monthly_cost))),
        (
            "Change vs Last Month",
            r.token(
                format!(
                    "{}{}",
                    if o.change_percentage > 0.0 { "+" } else { "" },
                    format_percentage(o.change_percentage)
                ),
                change_token,
            ),
        ),
        (
            "Budget Utilization",
            r.token(
                format!(
                    "{} of {}",
                    format_percentage(o.budget_utilization),
                    format_currency(o.budget_limit)
                ),
                // Inverted: a high utilization is the bad case
                quality_color(100.0 - o.budget_utilization),
            ),
        ),
        ("Cost per GB", r.cell(format_currency(o.cost_per_gb))),
        ("Cost per Query", r.cell(format!("${:.4}", o.cost_per_query))),
    ]);

    r.section("Cost Breakdown");
    let mut breakdown = r.table(vec!["Category", "Cost", "Share"]);
    for share in &page.breakdown {
        breakdown.add_row(vec![
            r.cell(share.category.label()),
            r.cell(format_currency(share.cost)),
            r.cell(format_percentage(share.share)),
        ]);
    }
    println!("{breakdown}");

    r.section("Optimization Recommendations");
    let mut recs = r.table(vec!["Recommendation", "Savings", "Priority", "Effort"]);
    for rec in &page.recommendations {
        recs.add_row(vec![
            r.cell(&rec.title),
            r.token(
                format!("Save {}", format_currency(rec.estimated_savings)),
                "text-success",
            ),
            r.token(rec.priority.as_str(), priority_token(rec.priority)),
            r.cell(rec.effort.as_str()),
        ]);
    }
    println!("{recs}");
    println!(
        "   Total potential savings: {}",
        format_currency(page.total_savings)
    );
}
