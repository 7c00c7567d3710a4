// ── Number formatting ──
//
// ru-RU grouping with no fraction digits: `1234567.8` → `1 234 568`
// (the separator is U+00A0).

use serde_json::Value;

/// Shown for input that is not a number.
pub const NOT_A_NUMBER: &str = "не число";

const GROUP_SEPARATOR: char = '\u{a0}';

/// Format a JSON scalar as a whole number with thousands grouping.
///
/// `null` and empty strings format as `"0"`; numeric strings are parsed;
/// anything else formats as [`NOT_A_NUMBER`].
pub fn format_number(value: &Value) -> String {
    to_number(value).map_or_else(|| NOT_A_NUMBER.to_owned(), format_whole)
}

/// Round half away from zero and group digits by thousands.
pub fn format_whole(n: f64) -> String {
    let rounded = n.round();
    if rounded.abs() < 1.0 {
        return "0".to_owned();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}
