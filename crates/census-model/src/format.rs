//! Display formatting for population values.

/// Parse a population estimate cell.
///
/// Accepts plain integers and decimal notation (truncated toward zero).
/// Empty or non-numeric cells yield `0`.
pub fn parse_estimate(cell: &str) -> i64 {
    let trimmed = cell.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        // `as` saturates for out-of-range floats
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}

/// Format an integer with `,` thousands separators (`1234567` -> `1,234,567`).
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
