//! Price display formatting.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Format a dollar amount as `$1,234.50`. Non-finite input renders as `$0.00`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_owned();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
