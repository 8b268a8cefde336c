#![allow(dead_code)]

pub mod logging;
pub mod retry;

/// Trims and collapses inner whitespace runs in a user-entered name.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Superficial email shape check, mirroring what the booking forms accept.
/// The backend performs the authoritative validation.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Accepts digits, spaces, and the usual phone punctuation; requires at
/// least 7 digits.
pub fn looks_like_phone(value: &str) -> bool {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= 7
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'))
}

/// Formats a price in cents for list views, e.g. `2350` -> `"$23.50"`.
pub fn format_price_cents(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

/// Parses a user-entered price like `"35"`, `"35.00"`, or `"$35.00"` into
/// cents. Returns None for negatives and anything non-numeric.
pub fn parse_price_cents(value: &str) -> Option<i64> {
    let cleaned = value.trim().trim_start_matches('$').trim();
    let amount: f64 = cleaned.parse().ok()?;
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some((amount * 100.0).round() as i64)
}
