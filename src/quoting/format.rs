//! Display formatting for monetary amounts.
//!
//! Owned by the presentation step, not the arithmetic: plan math works in
//! exact `Decimal` values and only here do amounts become strings. Rendering
//! matches the site's zero-decimal currency style ("$12,500").

use rust_decimal::Decimal;

use super::calculators::round_money;

/// Format an amount for display: currency symbol prefix, thousands
/// grouping, zero decimal places. `symbol` is `None` when the currency code
/// did not resolve in the catalog; the amount then renders bare instead of
/// failing.
pub fn format_amount(amount: Decimal, symbol: Option<&str>) -> String {
    let rounded = round_money(amount, 0);
    let mut out = String::new();
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    if let Some(symbol) = symbol {
        out.push_str(symbol);
    }
    out.push_str(&group_thousands(&rounded.abs().normalize().to_string()));
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
