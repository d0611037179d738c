//! Formatting Library
//!
//! Pure, total functions turning numbers and dates into display strings.
//! Nothing here panics: non-finite inputs display as zero, negatives keep
//! their sign.

use chrono::NaiveDate;

/// Replace NaN and infinities with 0.0
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Insert thousands separators into an integer ("1234567" -> "1,234,567")
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round to the nearest integer and add thousands separators
///
/// `format_number(1234.6)` -> `"1,235"`
pub fn format_number(value: f64) -> String {
    group_thousands(finite_or_zero(value).round() as i64)
}

/// Thousands-separated count
pub fn format_count(count: usize) -> String {
    group_thousands(i64::try_from(count).unwrap_or(i64::MAX))
}

/// Abbreviated currency used inside answer bodies
///
/// - `>= 1,000,000` -> `$X.XM`
/// - `>= 1,000` -> `$XK`
/// - otherwise the whole-dollar amount with separators
pub fn format_currency_abbrev(amount: f64) -> String {
    let amount = finite_or_zero(amount);
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();

    if abs >= 1_000_000.0 {
        let millions = (abs / 100_000.0).round() / 10.0;
        format!("{}${:.1}M", sign, millions)
    } else if abs >= 1_000.0 {
        let thousands = (abs / 1_000.0).round() as i64;
        format!("{}${}K", sign, thousands)
    } else {
        format!("{}${}", sign, group_thousands(abs.round() as i64))
    }
}

/// Full currency, whole dollars, never abbreviated ("$250,000")
pub fn format_currency_full(amount: f64) -> String {
    let amount = finite_or_zero(amount);
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(amount.abs().round() as i64))
}

/// Carbon estimate range, endpoints rounded ("1,200–2,400 tCO2e")
pub fn format_carbon_range(low: f64, high: f64) -> String {
    format!("{}–{} tCO2e", format_number(low), format_number(high))
}

/// Full date ("March 15, 2021")
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Year and month only ("March 2021")
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Integer percentage of `part` in `whole`; 0 when `whole` is 0
pub fn percentage(part: usize, whole: usize) -> u64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u64
}

/// Mean that reports 0.0 for an empty population
pub fn safe_average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        finite_or_zero(total / count as f64)
    }
}
