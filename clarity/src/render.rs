// clarity/src/render.rs
//
// Terminal presentation: semantic tokens from the core become table colors.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use clarity_core::domain::Route;
use clarity_core::domain::format::BadgeVariant;
use clarity_core::domain::settings::Theme;

/// `text-*` token -> terminal color. `None` keeps the default foreground.
pub fn token_color(token: &str) -> Option<Color> {
    match token {
        "text-quality-excellent" | "text-success" => Some(Color::Green),
        "text-quality-good" => Some(Color::Cyan),
        "text-quality-fair" | "text-warning" => Some(Color::Yellow),
        "text-quality-poor" => Some(Color::DarkYellow),
        "text-quality-critical" | "text-destructive" => Some(Color::Red),
        "text-accent" => Some(Color::Blue),
        "text-muted-foreground" => Some(Color::DarkGrey),
        _ => None,
    }
}

pub fn badge_color(variant: BadgeVariant) -> Option<Color> {
    match variant {
        BadgeVariant::Default => Some(Color::Green),
        BadgeVariant::Secondary => Some(Color::Yellow),
        BadgeVariant::Outline => None,
        BadgeVariant::Destructive => Some(Color::Red),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn paint(&self, cell: Cell, color: Option<Color>) -> Cell {
        match (self.theme, color) {
            (Theme::Color, Some(color)) => cell.fg(color),
            _ => cell,
        }
    }

    pub fn cell(&self, text: impl ToString) -> Cell {
        Cell::new(text)
    }

    /// Text colored by a `text-*` token.
    pub fn token(&self, text: impl ToString, token: &str) -> Cell {
        self.paint(Cell::new(text), token_color(token))
    }

    /// Badge rendered as `[label]`.
    pub fn badge(&self, label: impl std::fmt::Display, variant: BadgeVariant) -> Cell {
        self.paint(Cell::new(format!("[{}]", label)), badge_color(variant))
    }

    pub fn table<H: ToString>(&self, header: Vec<H>) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        let header: Vec<Cell> = header
            .into_iter()
            .map(|h| match self.theme {
                Theme::Color => Cell::new(h).add_attribute(Attribute::Bold),
                Theme::Plain => Cell::new(h),
            })
            .collect();
        table.set_header(header);
        table
    }

    /// Metric cards as a two-column table.
    pub fn cards(&self, cards: Vec<(&str, Cell)>) {
        let mut table = self.table(vec!["Metric", "Value"]);
        for (label, value) in cards {
            table.add_row(vec![Cell::new(label), value]);
        }
        println!("{table}");
    }

    pub fn page_header(&self, route: &Route, subtitle: &str) {
        println!("\n{}", route.title());
        if !subtitle.is_empty() {
            println!("{}", subtitle);
        }
        println!();
    }

    pub fn section(&self, title: &str) {
        println!("\n{}", title);
    }

    /// Transient state, kept off stdout.
    pub fn loading(&self, route: &Route) {
        eprintln!("⏳ Loading {}...", route.title());
    }

    /// Terminal failure state, distinct from loading.
    pub fn could_not_load(&self, route: &Route, reason: &str) {
        eprintln!("❌ Could not load {}: {}", route.title(), reason);
    }

    pub fn empty(&self, what: &str) {
        println!("   No {} match the current filters.", what);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_core::domain::format::{quality_color, severity_color, status_color};

    #[test]
    fn test_every_core_token_has_a_color_decision() {
        assert_eq!(token_color(quality_color(95.0)), Some(Color::Green));
        assert_eq!(token_color(quality_color(10.0)), Some(Color::Red));
        assert_eq!(token_color(severity_color("high")), Some(Color::Yellow));
        assert_eq!(token_color(severity_color("unknown")), None);
        assert_eq!(token_color(status_color("connected")), Some(Color::Green));
        assert_eq!(token_color(status_color("???")), Some(Color::DarkGrey));
    }

    #[test]
    fn test_badges() {
        assert_eq!(badge_color(BadgeVariant::Destructive), Some(Color::Red));
        assert_eq!(badge_color(BadgeVariant::Outline), None);
    }
}
