//! Display helpers for amounts and dates.

use chrono::{DateTime, Utc};

use crate::client::constant::CURRENCY;

/// Formats an amount with thousands separators and no fraction digits, e.g.
/// `IDR 1.250.000`.
pub fn currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}{CURRENCY} {grouped}")
}

pub fn date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// DaisyUI progress color for a utilization percentage.
pub fn utilization_class(value: f64) -> &'static str {
    if value > 100.0 {
        "progress-error"
    } else if value >= 80.0 {
        "progress-warning"
    } else {
        "progress-success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(currency(0.0), "IDR 0");
        assert_eq!(currency(999.0), "IDR 999");
        assert_eq!(currency(1_000.0), "IDR 1.000");
        assert_eq!(currency(1_250_000.4), "IDR 1.250.000");
        assert_eq!(currency(-15_000.0), "-IDR 15.000");
    }

    #[test]
    fn picks_utilization_color() {
        assert_eq!(utilization_class(10.0), "progress-success");
        assert_eq!(utilization_class(80.0), "progress-warning");
        assert_eq!(utilization_class(100.5), "progress-error");
    }

    #[test]
    fn formats_percentage_with_one_decimal() {
        assert_eq!(percentage(33.333), "33.3%");
    }
}
