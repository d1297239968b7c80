//! KPI Value Formatting
//!
//! Pure helpers turning raw metric values into display strings.

use serde::Deserialize;

/// Display format attached to a KPI by the backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiFormat {
    #[default]
    Number,
    Percent,
    Currency,
}

/// Format a KPI value for its card
pub fn format_value(value: f64, format: KpiFormat) -> String {
    match format {
        KpiFormat::Percent => format!("{:.1}%", value),
        KpiFormat::Currency => format!("${}", group_thousands(value.round() as i64)),
        KpiFormat::Number => group_thousands(value.round() as i64),
    }
}

/// Delta badge text: direction arrow plus absolute percent
pub fn format_delta(delta: f64) -> String {
    let arrow = if delta >= 0.0 { "▲" } else { "▼" };
    format!("{} {}%", arrow, delta.abs())
}

/// Group an integer value with comma thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    let first = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45200), "-45,200");
    }

    #[test]
    fn percent_keeps_one_decimal() {
        assert_eq!(format_value(4.2, KpiFormat::Percent), "4.2%");
        assert_eq!(format_value(4.0, KpiFormat::Percent), "4.0%");
        assert_eq!(format_value(-1.25, KpiFormat::Percent), "-1.2%");
    }

    #[test]
    fn currency_gets_prefix_and_grouping() {
        assert_eq!(format_value(45200.0, KpiFormat::Currency), "$45,200");
        assert_eq!(format_value(980.4, KpiFormat::Currency), "$980");
    }

    #[test]
    fn plain_numbers_round_and_group() {
        assert_eq!(format_value(12842.0, KpiFormat::Number), "12,842");
        assert_eq!(format_value(12842.7, KpiFormat::Number), "12,843");
    }

    #[test]
    fn delta_shows_direction_and_magnitude() {
        assert_eq!(format_delta(4.2), "▲ 4.2%");
        assert_eq!(format_delta(-2.5), "▼ 2.5%");
        assert_eq!(format_delta(0.0), "▲ 0%");
    }
}
