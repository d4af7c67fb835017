//! Lenient parsing of free-text numeric fields.
//!
//! Form inputs are parsed the way a browser form would treat them: leading
//! whitespace is skipped and the longest numeric prefix is used, so `"56.41 V"`
//! reads as `56.41`. Text with no numeric prefix yields `None` and callers
//! substitute a default instead of failing.
//!
//! ```
//! use twine_pv::support::parse::{integer_or, number_or, parse_number};
//!
//! assert_eq!(parse_number(" -0.25%/°C"), Some(-0.25));
//! assert_eq!(parse_number("n/a"), None);
//!
//! // Blank and zero fields fall back to the default.
//! assert_eq!(number_or("", 1500.0), 1500.0);
//! assert_eq!(number_or("0", 1500.0), 1500.0);
//! assert_eq!(integer_or("18.7", 14), 18);
//! ```

/// Parses the leading decimal number in `text`.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. Returns `None` if there is no numeric prefix or the
/// value is not finite.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let len = decimal_prefix_len(text.as_bytes());
    if len == 0 {
        return None;
    }
    text[..len].parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses the leading integer in `text`, ignoring any fractional part.
#[must_use]
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    text[..sign + digits].parse::<i64>().ok()
}

/// Parses a number, falling back to `default` when the field is blank,
/// unparseable, or zero.
#[must_use]
pub fn number_or(text: &str, default: f64) -> f64 {
    parse_number(text)
        .filter(|value| *value != 0.0)
        .unwrap_or(default)
}

/// Parses an integer, falling back to `default` when the field is blank,
/// unparseable, zero, or out of range for `i32`.
#[must_use]
pub fn integer_or(text: &str, default: i32) -> i32 {
    parse_integer(text)
        .and_then(|value| i32::try_from(value).ok())
        .filter(|value| *value != 0)
        .unwrap_or(default)
}

/// Returns the byte length of the decimal literal at the start of `bytes`.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    // Only consume an exponent that is followed by at least one digit.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
