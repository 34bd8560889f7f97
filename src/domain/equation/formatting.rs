//! Numeral formatting for the single supported locale (comma decimal separator).

use super::value_objects::SolutionSet;

/// Sentinel for symbolic fields without a real value.
pub const EMPTY_SET: &str = "∅";
/// Text shown for `d` when there is no real root.
pub const NO_REAL_ROOT: &str = "Não há raiz real";
/// Shorter variant used in the canvas summary.
pub const NO_ROOT: &str = "Não há raiz";

/// Two fraction digits with a comma separator, `None` for non-finite values.
///
/// Exact halves round away from zero (`0,125` → `0,13`), like
/// `Number.prototype.toFixed`. Negative zero renders as `0,00`.
pub fn format_decimal(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let value = if value == 0.0 { 0.0 } else { value };
    let text = match half_cent_tie(value.abs()) {
        Some(cents) => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{}.{:02}", sign, cents / 100, cents % 100)
        }
        None => format!("{:.2}", value),
    };
    Some(text.replace('.', ","))
}

/// Hundredths rounded up when `magnitude` sits exactly between two of them.
///
/// A double can only do so with a fractional part of 1/8, 3/8, 5/8 or 7/8,
/// i.e. when `magnitude · 8` is an odd integer.
fn half_cent_tie(magnitude: f64) -> Option<u64> {
    let eighths = magnitude * 8.0;
    if eighths.fract() != 0.0 || eighths % 2.0 != 1.0 || eighths >= 2f64.powi(53) {
        return None;
    }
    let eighths = eighths as u64;
    Some((eighths * 25 + 1) / 2)
}

/// [`format_decimal`] with a fallback for non-finite values.
pub fn format_decimal_or(value: f64, fallback: &str) -> String {
    format_decimal(value).unwrap_or_else(|| fallback.to_string())
}

/// Shortest rendering of a raw coefficient, comma separated.
pub fn format_coefficient(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string().replace('.', ",")
}

/// `"+ "` for non-negative values; negative numbers carry their own sign.
pub fn sign_prefix(value: f64) -> &'static str {
    if value >= 0.0 { "+ " } else { "" }
}

/// Set-builder rendering of the real solutions.
pub fn format_solution_set(solutions: SolutionSet) -> String {
    match solutions {
        SolutionSet::Empty => EMPTY_SET.to_string(),
        SolutionSet::Single(root) => {
            format!("{{ x ∈ ℝ | {} }}", format_decimal_or(root, EMPTY_SET))
        }
        SolutionSet::Pair(r, s) => format!(
            "{{ x ∈ ℝ | {}; {} }}",
            format_decimal_or(r, EMPTY_SET),
            format_decimal_or(s, EMPTY_SET)
        ),
    }
}
