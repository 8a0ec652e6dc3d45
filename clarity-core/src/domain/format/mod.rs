// clarity-core/src/domain/format/mod.rs
//
// Pure display formatters (en-US) and semantic color tokens.

pub mod numbers;
pub mod time;
pub mod tokens;

pub use numbers::{
    format_bytes, format_currency, format_duration, format_number, format_percentage,
    humanize_identifier,
};
pub use time::{
    INVALID_DATE, format_date_time, format_relative_time, format_relative_time_at,
    format_short_date, parse_timestamp,
};
pub use tokens::{
    BadgeVariant, QualityTier, execution_badge, log_level_badge, quality_badge_variant,
    quality_color, severity_color, status_color, table_quality_badge,
};
