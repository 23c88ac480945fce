//! Field type inference and numeric rounding.

use crate::config::{ConverterConfig, EmptyField, MAX_PRECISION};
use crate::value::Value;

/// Detect whether a string spells a boolean (`true`/`false`, any case).
pub fn is_boolean_string(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// Round `number` to `precision` decimal digits.
///
/// The value is first truncated toward zero at the requested digit, then
/// bumped up by one unit when the discarded remainder (scaled) is above one
/// half. The remainder is signed, so negative inputs only ever truncate.
///
/// Non-finite input, a precision above [`MAX_PRECISION`] and values too large
/// to scale all come back unchanged.
///
/// ```
/// use csvdoc::infer::round;
///
/// assert_eq!(round(4.4474324, 2), 4.45);
/// assert_eq!(round(-4.96, 1), -4.9);
/// ```
pub fn round(number: f64, precision: u32) -> f64 {
    if !number.is_finite() || precision > MAX_PRECISION {
        return number;
    }
    let scale = 10f64.powi(precision as i32);
    if !(number * scale).is_finite() {
        return number;
    }
    let mut corrected = (number * scale).trunc() / scale;

    // round up the last digit
    if (number - corrected) * scale > 0.5 {
        corrected += 1.0 / scale;
    }
    corrected
}

/// Infer the typed value of one raw field.
///
/// Booleans win over numbers, numbers over empty, and anything left over is
/// kept as text. This never fails.
///
/// A literal that overflows to infinity (`1e400`) stays text; only a spelled
/// out `inf`/`infinity`/`nan` becomes a non-finite number.
pub fn infer_value(raw: &str, config: &ConverterConfig) -> Value {
    if is_boolean_string(raw) {
        return Value::Bool(raw.eq_ignore_ascii_case("true"));
    }
    if let Ok(number) = raw.parse::<f64>()
        && (number.is_finite() || spells_non_finite(raw))
    {
        return Value::Number(round(number, config.precision));
    }
    if raw.is_empty() && config.empty_field == EmptyField::Null {
        return Value::Null;
    }
    Value::Text(raw.to_string())
}

fn spells_non_finite(raw: &str) -> bool {
    let digits = raw.trim_start_matches(['+', '-']).to_ascii_lowercase();
    matches!(digits.as_str(), "inf" | "infinity" | "nan")
}
