//! Money string formatting and parsing

/// Format an amount as US dollars with two decimals and comma separators,
/// e.g. `format_currency(25000.5)` -> `"$25,000.50"`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    // Round to cents first so 0.005 carries into the dollar part correctly.
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

/// Parse a money string leniently: strip everything that is not a digit or a
/// decimal point, then parse. `None` when nothing numeric remains.
pub fn parse_currency(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    cleaned.parse().ok()
}
