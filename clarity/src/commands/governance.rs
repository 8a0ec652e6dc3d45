// clarity/src/commands/governance.rs

use clarity_core::application::load_governance_page;
use clarity_core::domain::Route;
use clarity_core::domain::fixtures::{GovernanceOverview, PolicyStatus};
use clarity_core::domain::format::{
    BadgeVariant, format_number, format_percentage, quality_badge_variant, quality_color,
};

use super::Dashboard;
use crate::render::Renderer;

pub async fn execute(dash: &Dashboard) -> anyhow::Result<()> {
    dash.show(Route::Governance, load_governance_page(), render)
        .await
}

fn render(r: &Renderer, page: GovernanceOverview) {
    r.page_header(
        &Route::Governance,
        "Manage data policies, compliance, and classification",
    );
    r.cards(vec![
        ("Active Policies", r.cell(page.active_policies)),
        ("Pending Approval", r.token(page.pending_approval, "text-warning")),
        (
            "Compliance Score",
            r.token(
                format_percentage(page.compliance_score),
                quality_color(page.compliance_score),
            ),
        ),
        (
            "Classified Assets",
            r.cell(format_number(page.classified_assets() as f64)),
        ),
    ]);

    r.section("Data Policies");
    let mut policies = r.table(vec!["Policy", "Type", "Status", "Compliance"]);
    for policy in &page.policies {
        let status = match policy.status {
            PolicyStatus::Active => BadgeVariant::Default,
            PolicyStatus::Draft => BadgeVariant::Secondary,
        };
        policies.add_row(vec![
            r.cell(&policy.name),
            r.cell(&policy.kind),
            r.badge(policy.status.as_str(), status),
            r.badge(
                format_percentage(policy.compliance),
                quality_badge_variant(policy.compliance),
            ),
        ]);
    }
    println!("{policies}");

    r.section("Data Classification");
    let mut classes = r.table(vec!["Level", "Assets"]);
    for class in &page.classifications {
        classes.add_row(vec![r.cell(&class.level), r.cell(class.assets)]);
    }
    println!("{classes}");
}
