//! Display formatting for measured values.

/// Placeholder shown for missing or non-numeric values.
pub const MISSING: &str = "-";

/// Format a value with two decimals, or [`MISSING`] when there is none.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => fixed2(v),
        _ => MISSING.to_string(),
    }
}

/// Fixed two-decimal formatting, rounding exact ties away from zero.
///
/// `{:.2}` rounds the exact binary value, but exact ties (k/8 with k odd,
/// e.g. 0.125) may resolve to even. Those are the only doubles with a tie at
/// the third decimal, so they are rounded in integer hundredths. Values such
/// as -1.005 are not ties: the nearest double lies just above -1.005, so the
/// result is "-1.00".
fn fixed2(v: f64) -> String {
    let eighths = v * 8.0;
    if eighths.abs() < 9_007_199_254_740_992.0 && eighths.fract() == 0.0 {
        let k = eighths as i64;
        if k % 2 != 0 {
            // k/8 is k*12.5 hundredths; k*25 is odd so the half never cancels.
            let hundredths = (k * 25 + k.signum()) / 2;
            let sign = if hundredths < 0 { "-" } else { "" };
            let abs = hundredths.unsigned_abs();
            return format!("{}{}.{:02}", sign, abs / 100, abs % 100);
        }
    }
    // -0.0 prints unsigned; small negatives keep their sign ("-0.00").
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{:.2}", v)
}
