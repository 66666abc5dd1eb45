//! Formatting utilities used for CLI tables and metric lines.

/// Group the digits of an unsigned integer: 1234567 → "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_count(n: usize) -> String {
    group_thousands(n as u64)
}

/// Whole-unit currency amount: `$1,235`, `-$40`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 && amount.round() != 0.0 {
        "-"
    } else {
        ""
    };
    let units = amount.abs().round() as u64;
    format!("{sign}{symbol}{}", group_thousands(units))
}

/// Currency with cents, for per-unit figures: `$12.50`.
/// Amounts that round to zero carry no sign.
pub fn format_currency_cents(amount: f64, symbol: &str) -> String {
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && total_cents != 0 { "-" } else { "" };
    format!(
        "{sign}{symbol}{}.{:02}",
        group_thousands(total_cents / 100),
        total_cents % 100
    )
}

/// A ratio in [0, 1] shown as a percentage with one decimal: `66.7%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Placeholder for values that are undefined rather than zero.
pub const UNDEFINED: &str = "n/a";

pub fn format_optional_currency(amount: Option<f64>, symbol: &str) -> String {
    amount
        .map(|a| format_currency_cents(a, symbol))
        .unwrap_or_else(|| UNDEFINED.to_string())
}
