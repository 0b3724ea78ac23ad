//! Number formatting for summary cards.

use super::calculator::{Growth, GrowthKind};

/// Format with `decimals` places and comma thousands separators, e.g. `4,300`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    // Rounded to zero: no "-0"
    let is_zero = formatted.bytes().all(|b| b == b'0' || b == b'.');
    if value.is_sign_negative() && !is_zero {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Card headline value, e.g. `4,300 B`.
pub fn format_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", format_grouped(v, 0), unit),
        None => "n/a".to_string(),
    }
}

/// Card delta text: `300.0 B`, `10.0 %`, `1.08x` or `n/a`.
pub fn format_growth(growth: Growth, kind: GrowthKind, unit: &str) -> String {
    match (growth, kind) {
        (Growth::NotApplicable, _) => "n/a".to_string(),
        (Growth::Value(v), GrowthKind::Absolute) => format!("{} {}", format_grouped(v, 1), unit),
        (Growth::Value(v), GrowthKind::Percent) => format!("{} %", format_grouped(v, 1)),
        (Growth::Value(v), GrowthKind::Ratio) => format!("{:.2}x", v),
    }
}
