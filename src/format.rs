//! Display formatters for money, counts, ratios, member metrics and dates.
//!
//! Missing values always render as an empty string.

use crate::table::CellValue;
use chrono::{DateTime, NaiveDate};

/// Inserts `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn grouped_integer(value: f64) -> String {
    let rounded = value.abs().round();
    let sign = if value < 0.0 && rounded != 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(&format!("{:.0}", rounded)))
}

/// USD with no decimals: `1234.5` → `$1,235`, `-50` → `-$50`.
pub fn currency(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if !v.is_finite() => "N/A".to_string(),
        Some(v) => {
            let grouped = grouped_integer(v);
            match grouped.strip_prefix('-') {
                Some(digits) => format!("-${}", digits),
                None => format!("${}", grouped),
            }
        }
    }
}

/// Grouped count with up to three decimals: `12345` → `12,345`.
pub fn count(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if !v.is_finite() => "N/A".to_string(),
        Some(v) => {
            let fixed = format!("{:.3}", v.abs());
            let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
            let frac = frac_part.trim_end_matches('0');
            let sign = if v < 0.0 && (int_part != "0" || !frac.is_empty()) { "-" } else { "" };
            if frac.is_empty() {
                format!("{}{}", sign, group_thousands(int_part))
            } else {
                format!("{}{}.{}", sign, group_thousands(int_part), frac)
            }
        }
    }
}

/// Whole percent from a ratio: `0.65` → `65%`.
pub fn percentage(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if !v.is_finite() => "N/A".to_string(),
        Some(v) => format!("{}%", grouped_integer(v * 100.0)),
    }
}

/// Shortest round-trip form of a number, `1200` rather than `1200.0`.
pub fn plain_number(value: f64) -> String {
    format!("{}", value)
}

/// Formats a member's metric according to its risk category.
pub fn member_metric(category: &str, value: &CellValue) -> String {
    match (category, value) {
        (_, CellValue::Missing) => String::new(),
        ("Suspect Conditions", v) => format!("{} conditions", v),
        ("Frequent Flyers", v) => format!("{} visits", v),
        ("Polypharmacy", v) => format!("{} medications", v),
        ("High Utilizers" | "High Pharmacy Cost" | "High Specialty Cost", CellValue::Number(n)) => {
            currency(Some(*n))
        }
        ("High Utilizers" | "High Pharmacy Cost" | "High Specialty Cost", CellValue::Text(s)) => {
            s.trim()
                .parse::<f64>()
                .map_or_else(|_| s.clone(), |n| currency(Some(n)))
        }
        (_, v) => v.to_string(),
    }
}

/// Comma-joined list of quality measures.
pub fn measures(values: &[String]) -> String {
    values.join(", ")
}

/// Long US date: `2025-01-05` → `January 5, 2025`. Unparseable input is returned as is.
pub fn long_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
