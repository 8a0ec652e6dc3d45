// clarity-core/src/domain/format/tokens.rs
//
// Score / severity / status -> semantic color-class tokens.
// The quality color scale (5 tiers) and the badge scale (4 variants) use
// different boundaries and must stay independent.

use serde::Serialize;
use std::fmt;

use crate::domain::fixtures::{ExecutionResult, ExecutionStatus, LogLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl QualityTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 70.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Fair
        } else if score >= 30.0 {
            Self::Poor
        } else {
            Self::Critical
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Excellent => "text-quality-excellent",
            Self::Good => "text-quality-good",
            Self::Fair => "text-quality-fair",
            Self::Poor => "text-quality-poor",
            Self::Critical => "text-quality-critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Destructive => "destructive",
        }
    }
}

impl fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn quality_color(score: f64) -> &'static str {
    QualityTier::from_score(score).token()
}

pub fn quality_badge_variant(score: f64) -> BadgeVariant {
    if score >= 90.0 {
        BadgeVariant::Default
    } else if score >= 70.0 {
        BadgeVariant::Secondary
    } else if score >= 50.0 {
        BadgeVariant::Outline
    } else {
        BadgeVariant::Destructive
    }
}

/// Catalog table badge: strict thresholds, no outline tier.
pub fn table_quality_badge(score: f64) -> BadgeVariant {
    if score > 90.0 {
        BadgeVariant::Default
    } else if score > 70.0 {
        BadgeVariant::Secondary
    } else {
        BadgeVariant::Destructive
    }
}

pub fn severity_color(severity: &str) -> &'static str {
    match severity.to_lowercase().as_str() {
        "critical" => "text-destructive",
        "high" => "text-warning",
        "medium" => "text-accent",
        "low" => "text-muted-foreground",
        _ => "text-foreground",
    }
}

pub fn status_color(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "active" | "connected" | "resolved" | "completed" => "text-success",
        "warning" | "paused" | "in_progress" => "text-warning",
        "error" | "failed" | "critical" => "text-destructive",
        "open" | "investigating" => "text-accent",
        _ => "text-muted-foreground",
    }
}

/// Outcome badge of an execution row.
pub fn execution_badge(status: ExecutionStatus, result: Option<ExecutionResult>) -> BadgeVariant {
    match (status, result) {
        (ExecutionStatus::Completed, Some(ExecutionResult::Passed)) => BadgeVariant::Default,
        (ExecutionStatus::Completed, Some(ExecutionResult::Failed)) => BadgeVariant::Destructive,
        _ => BadgeVariant::Secondary,
    }
}

pub fn log_level_badge(level: LogLevel) -> BadgeVariant {
    match level {
        LogLevel::Error => BadgeVariant::Destructive,
        LogLevel::Warn => BadgeVariant::Secondary,
        _ => BadgeVariant::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_color_boundaries() {
        for boundary in [90.0, 70.0, 50.0, 30.0] {
            assert_ne!(
                quality_color(boundary),
                quality_color(boundary - 0.1),
                "boundary at {}",
                boundary
            );
        }
        assert_eq!(quality_color(100.0), "text-quality-excellent");
        assert_eq!(quality_color(90.0), "text-quality-excellent");
        assert_eq!(quality_color(89.9), "text-quality-good");
        assert_eq!(quality_color(70.0), "text-quality-good");
        assert_eq!(quality_color(50.0), "text-quality-fair");
        assert_eq!(quality_color(30.0), "text-quality-poor");
        assert_eq!(quality_color(29.9), "text-quality-critical");
        assert_eq!(quality_color(0.0), "text-quality-critical");
    }

    #[test]
    fn test_badge_variant_boundaries() {
        assert_eq!(quality_badge_variant(90.0), BadgeVariant::Default);
        assert_eq!(quality_badge_variant(89.9), BadgeVariant::Secondary);
        assert_eq!(quality_badge_variant(70.0), BadgeVariant::Secondary);
        assert_eq!(quality_badge_variant(69.9), BadgeVariant::Outline);
        assert_eq!(quality_badge_variant(50.0), BadgeVariant::Outline);
        assert_eq!(quality_badge_variant(49.9), BadgeVariant::Destructive);
    }

    #[test]
    fn test_scales_are_not_conflated() {
        // 30..50 is "poor" on the color scale but already destructive as a badge.
        assert_eq!(QualityTier::from_score(40.0), QualityTier::Poor);
        assert_eq!(quality_badge_variant(40.0), BadgeVariant::Destructive);
        // Below 30 both scales bottom out, on different tiers.
        assert_eq!(QualityTier::from_score(10.0), QualityTier::Critical);
        assert_eq!(quality_badge_variant(10.0), BadgeVariant::Destructive);
        // The badge scale has no boundary at 30.
        assert_eq!(quality_badge_variant(30.0), quality_badge_variant(29.9));
        assert_ne!(quality_color(30.0), quality_color(29.9));
    }

    #[test]
    fn test_table_badge_uses_strict_thresholds() {
        assert_eq!(table_quality_badge(90.0), BadgeVariant::Secondary);
        assert_eq!(table_quality_badge(90.1), BadgeVariant::Default);
        assert_eq!(table_quality_badge(70.0), BadgeVariant::Destructive);
    }

    #[test]
    fn test_severity_color_is_case_insensitive_with_fallback() {
        assert_eq!(severity_color("CRITICAL"), "text-destructive");
        assert_eq!(severity_color("High"), "text-warning");
        assert_eq!(severity_color("medium"), "text-accent");
        assert_eq!(severity_color("low"), "text-muted-foreground");
        assert_eq!(severity_color("unknown"), "text-foreground");
    }

    #[test]
    fn test_status_color_table() {
        for s in ["active", "Connected", "resolved", "COMPLETED"] {
            assert_eq!(status_color(s), "text-success");
        }
        for s in ["warning", "paused", "in_progress"] {
            assert_eq!(status_color(s), "text-warning");
        }
        for s in ["error", "failed", "critical"] {
            assert_eq!(status_color(s), "text-destructive");
        }
        assert_eq!(status_color("open"), "text-accent");
        assert_eq!(status_color("investigating"), "text-accent");
        assert_eq!(status_color("draft"), "text-muted-foreground");
    }

    #[test]
    fn test_execution_badge() {
        use ExecutionStatus::*;
        assert_eq!(execution_badge(Completed, Some(ExecutionResult::Passed)), BadgeVariant::Default);
        assert_eq!(
            execution_badge(Completed, Some(ExecutionResult::Failed)),
            BadgeVariant::Destructive
        );
        assert_eq!(execution_badge(Running, None), BadgeVariant::Secondary);
        assert_eq!(
            execution_badge(Failed, Some(ExecutionResult::Failed)),
            BadgeVariant::Secondary
        );
    }

    #[test]
    fn test_log_level_badge() {
        assert_eq!(log_level_badge(LogLevel::Error), BadgeVariant::Destructive);
        assert_eq!(log_level_badge(LogLevel::Warn), BadgeVariant::Secondary);
        assert_eq!(log_level_badge(LogLevel::Info), BadgeVariant::Default);
    }
}
