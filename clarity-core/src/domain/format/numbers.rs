// clarity-core/src/domain/format/numbers.rs

const BYTE_UNITS: [&str; 6] = ["Bytes", "KB", "MB", "GB", "TB", "PB"];

/// Inserts ',' every three digits of an unsigned integer string.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rounds `|value|` to `decimals` fraction digits, halves away from zero.
/// Works on the shortest decimal form of the float, so `0.125` is a tie.
fn round_half_away(value: f64, decimals: usize) -> (String, String) {
    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    let frac: Vec<u8> = frac_part.bytes().map(|b| b - b'0').collect();
    digits.extend(frac.iter().take(decimals));
    digits.resize(int_part.len() + decimals, 0);

    if frac.get(decimals).is_some_and(|d| *d >= 5) {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

/// Fixed-point rendering with grouping, `decimals` digits after the point.
fn grouped_fixed(value: f64, decimals: usize) -> String {
    let (int_part, frac_part) = round_half_away(value, decimals);
    let mut out = group_digits(&int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

fn is_negative_after_rounding(value: f64, decimals: usize) -> bool {
    let (int_part, frac_part) = round_half_away(value, decimals);
    value < 0.0 && (int_part.bytes().any(|b| b != b'0') || frac_part.bytes().any(|b| b != b'0'))
}

/// `$1,234.50`, `-$12.00`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return format_number(amount);
    }
    let sign = if is_negative_after_rounding(amount, 2) { "-" } else { "" };
    format!("{}${}", sign, grouped_fixed(amount, 2))
}

/// Input on a 0-100 scale, one decimal: `87.3%`.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}%", format_number(value));
    }
    let sign = if is_negative_after_rounding(value, 1) { "-" } else { "" };
    format!("{}{}%", sign, grouped_fixed(value, 1))
}

/// Grouped number with up to three fraction digits, trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let mut out = grouped_fixed(value, 3);
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    let sign = if is_negative_after_rounding(value, 3) { "-" } else { "" };
    format!("{}{}", sign, out)
}

/// Base-1024 size with two-decimal rounding: `1.5 KB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, BYTE_UNITS[unit])
}

/// `1h 1m 1s`, leading zero units dropped.
pub fn format_duration(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

/// `null_check` -> `null check`. Only the first underscore is replaced.
pub fn humanize_identifier(id: &str) -> String {
    id.replacen('_', " ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 Bytes");
        assert_eq!(format_bytes(1), "1 Bytes");
        assert_eq!(format_bytes(1023), "1023 Bytes");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(1_288_490_189), "1.2 GB");
    }

    #[test]
    fn test_format_bytes_stays_in_pb() {
        let two_thousand_pb = 2048 * 1024_u64.pow(5);
        assert_eq!(format_bytes(two_thousand_pb), "2048 PB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(999), "0s");
        assert_eq!(format_duration(65_000), "1m 5s");
        assert_eq!(format_duration(3_661_000), "1h 1m 1s");
        assert_eq!(format_duration(3_600_000), "1h 0m 0s");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(48250.75), "$48,250.75");
        assert_eq!(format_currency(-12.0), "-$12.00");
        assert_eq!(format_currency(0.0042), "$0.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(87.34), "87.3%");
        assert_eq!(format_percentage(100.0), "100.0%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(12345.0), "12,345.0%");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1_234_567.0), "1,234,567");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(0.12345), "0.123");
        assert_eq!(format_number(-48_250.0), "-48,250");
    }

    #[test]
    fn test_ties_round_half_away_from_zero() {
        // The overview averages (90 + 85 + 88 + 86) / 4
        assert_eq!(format_percentage(87.25), "87.3%");
        assert_eq!(format_percentage(0.25), "0.3%");
        assert_eq!(format_percentage(-0.25), "-0.3%");
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(-0.125), "-$0.13");
        assert_eq!(format_number(0.0625), "0.063");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_rounding_carries_into_integer_part() {
        assert_eq!(format_currency(9.995), "$10.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_percentage(99.96), "100.0%");
        assert_eq!(format_number(0.9995), "1");
    }

    #[test]
    fn test_humanize_identifier_replaces_first_underscore_only() {
        assert_eq!(humanize_identifier("null_check"), "null check");
        assert_eq!(humanize_identifier("referential_integrity_x"), "referential integrity_x");
        assert_eq!(humanize_identifier("completeness"), "completeness");
    }
}
