//! Centralized display formatting for campaign amounts.
//!
//! All currency and percentage display goes through this module so the
//! summary view, tier listing, and recency table render amounts the same
//! way.

/// Insert `,` thousands separators into a non-negative integer string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Format a dollar amount as US currency with two decimal places.
///
/// # Examples
/// ```
/// use pledge_types::formatting::format_money;
/// assert_eq!(format_money(0.0), "$0.00");
/// assert_eq!(format_money(50.0), "$50.00");
/// assert_eq!(format_money(1234.5), "$1,234.50");
/// assert_eq!(format_money(18000.0), "$18,000.00");
/// ```
pub fn format_money(amount: f64) -> String {
    // Round to cents first so 999.995 carries into the integer part.
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(&(cents / 100).to_string());
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${whole}.{:02}", cents % 100)
}

/// Format a progress fraction as a percentage with two decimal places.
///
/// # Examples
/// ```
/// use pledge_types::formatting::format_percent;
/// assert_eq!(format_percent(0.36), "36.00%");
/// assert_eq!(format_percent(1.0), "100.00%");
/// assert_eq!(format_percent(0.0), "0.00%");
/// ```
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
