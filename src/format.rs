//! Display formatting for quantities and date ranges.

use chrono::NaiveDate;

/// Formats an integer with `.` thousands separators: `1234567` → `"1.234.567"`.
pub fn number_format(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Inverse of [`number_format`]. Returns `None` for anything that is not
/// digits and dots.
pub fn unformat_number(text: &str) -> Option<u64> {
    let digits: String = text.trim().chars().filter(|c| *c != '.').collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `"03 Jun 2024"`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// `"03 Jun 2024 - 28 Jun 2024"`.
pub fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", day_label(start), day_label(end))
}
