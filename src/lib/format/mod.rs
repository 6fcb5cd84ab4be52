//! Thousands-grouped number rendering for display.

use crate::config::{DECIMAL_SCALE, DECIMAL_SEPARATOR, THOUSANDS_SEPARATOR};

/// Grouping and rounding convention used when rendering numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub thousands_separator: char,
    pub decimal_separator: char,
    /// Digits kept after the decimal point.
    pub decimal_scale: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: THOUSANDS_SEPARATOR,
            decimal_separator: DECIMAL_SEPARATOR,
            decimal_scale: DECIMAL_SCALE,
        }
    }
}

impl NumberFormat {
    /// Render `value` rounded half up to `decimal_scale` digits.
    ///
    /// Rounding works on the shortest decimal form of `value`, so `1.005`
    /// becomes `1.01`. With `fixed_decimal` the fraction is always padded to
    /// `decimal_scale` digits; otherwise trailing zeros are dropped.
    /// Non-finite values use their `Display` form.
    pub fn format(&self, value: f64, fixed_decimal: bool) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let (int_part, frac_part) = round_half_up(value.abs(), self.decimal_scale);
        let frac = if fixed_decimal {
            frac_part.as_str()
        } else {
            frac_part.trim_end_matches('0')
        };

        // -0.001 rounds to zero and must not keep its sign.
        let negative = value.is_sign_negative()
            && int_part
                .bytes()
                .chain(frac_part.bytes())
                .any(|b| matches!(b, b'1'..=b'9'));

        let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + frac.len() + 2);
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(&int_part, self.thousands_separator));
        if !frac.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

/// Render a number with the default grouping, rounded to two decimals.
pub fn format_number(value: f64, fixed_decimal: bool) -> String {
    NumberFormat::default().format(value, fixed_decimal)
}

/// Split a non-negative finite `value` into integer and fraction digits,
/// the fraction exactly `scale` digits long.
fn round_half_up(value: f64, scale: usize) -> (String, String) {
    // `Display` for f64 is the shortest round-trip form and never uses an
    // exponent.
    let shortest = value.to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(frac_part.bytes().take(scale));
    digits.resize(int_part.len() + scale, b'0');

    if frac_part.as_bytes().get(scale).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - scale;
    let frac = digits.split_off(split);
    (
        String::from_utf8(digits).unwrap_or_default(),
        String::from_utf8(frac).unwrap_or_default(),
    )
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
