//! Display formatting for computed values.
//!
//! Values are shown rounded to at most a fixed number of fraction digits,
//! with trailing zeros dropped and `,` as the thousands separator.

/// Text shown in place of a missing or invalid value.
pub const PLACEHOLDER: &str = "-";

/// Formats `value` with at most `max_fraction_digits` fraction digits and
/// thousands separators.
///
/// Non-finite values render as [`PLACEHOLDER`].
///
/// ```
/// use twine_pv::support::format::format_grouped;
///
/// assert_eq!(format_grouped(924.8934, 1), "924.9");
/// assert_eq!(format_grouped(1500.0, 1), "1,500");
/// assert_eq!(format_grouped(-1234567.891, 2), "-1,234,567.89");
/// ```
#[must_use]
pub fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }

    let (int_part, frac_part) = rounded_digits(value.abs(), max_fraction_digits);
    let frac_part = frac_part.trim_end_matches('0');

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();

    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac_part.len() + 2);
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Rounds `value` to `digits` fraction digits, matching [`format_grouped`].
///
/// Useful when a value must be exported exactly as it was displayed.
#[must_use]
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let (int_part, frac_part) = rounded_digits(value.abs(), digits);
    let magnitude: f64 = format!("{int_part}.{frac_part}")
        .trim_end_matches('.')
        .parse()
        .unwrap_or(value.abs());

    if magnitude == 0.0 {
        0.0
    } else {
        magnitude.copysign(value)
    }
}

/// Splits a finite, non-negative `magnitude` into integer and fraction
/// digits, rounded half up to at most `digits` fraction digits.
///
/// Rounding works on the shortest decimal text that reads back as
/// `magnitude`, so `820.25` is a tie even though its binary value sits
/// slightly below it.
fn rounded_digits(magnitude: f64, digits: usize) -> (String, String) {
    let shortest = magnitude.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    if frac_part.len() <= digits {
        return (int_part.to_owned(), frac_part.to_owned());
    }

    let mut kept: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(digits)).collect();

    if frac_part.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let to_text = |bytes: &[u8]| bytes.iter().copied().map(char::from).collect::<String>();
    (to_text(&kept[..split]), to_text(&kept[split..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_are_dropped() {
        assert_eq!(format_grouped(635.0, 2), "635");
        assert_eq!(format_grouped(84.05, 2), "84.05");
        assert_eq!(format_grouped(48.653625, 2), "48.65");
        assert_eq!(format_grouped(100.0, 2), "100");
        assert_eq!(format_grouped(533.70, 2), "533.7");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_grouped(999.96, 1), "1,000");
        assert_eq!(format_grouped(12345.0, 0), "12,345");
        assert_eq!(format_grouped(1_000_000.04, 1), "1,000,000");
    }

    #[test]
    fn negative_zero_is_unsigned() {
        assert_eq!(format_grouped(-0.0, 2), "0");
        assert_eq!(format_grouped(-0.001, 2), "0");
        assert_eq!(format_grouped(-2.5, 1), "-2.5");
    }

    #[test]
    fn non_finite_values_use_placeholder() {
        assert_eq!(format_grouped(f64::NAN, 2), PLACEHOLDER);
        assert_eq!(format_grouped(f64::INFINITY, 1), PLACEHOLDER);
    }

    #[test]
    fn rounding_matches_display() {
        assert_eq!(round_to(48.653625, 2), 48.65);
        assert_eq!(round_to(924.8934, 1), 924.9);
        assert_eq!(round_to(635.0, 2), 635.0);
        assert!(round_to(f64::NAN, 2).is_nan());
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert_eq!(round_to(-2.46, 1), -2.5);
    }

    #[test]
    fn decimal_ties_round_up() {
        assert_eq!(format_grouped(820.25, 1), "820.3");
        assert_eq!(format_grouped(0.125, 2), "0.13");
        assert_eq!(format_grouped(-0.125, 2), "-0.13");
        assert_eq!(format_grouped(9_999.95, 1), "10,000");
        assert_eq!(round_to(820.25, 1), 820.3);
        assert_eq!(round_to(684.25, 1), 684.3);
    }
}
