//! Number formatting for reports and terminal output.
//!
//! Every formatter renders a non-finite value (NaN, ±∞) as [`PLACEHOLDER`].

/// Shown in place of any non-finite value
pub const PLACEHOLDER: &str = "—";

/// Format with thousands separators and at most `decimals` fraction digits.
///
/// Trailing zeros in the fraction are dropped, so `fmt_grouped(250.0, 1)`
/// gives `"250"`.
///
/// ```rust
/// use girder_core::report::format::fmt_grouped;
///
/// assert_eq!(fmt_grouped(546_731.0, 0), "546,731");
/// assert_eq!(fmt_grouped(627.648, 1), "627.6");
/// assert_eq!(fmt_grouped(f64::INFINITY, 1), "—");
/// ```
pub fn fmt_grouped(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let fixed = format!("{:.*}", decimals, x.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if x < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format in exponential notation with `digits` fraction digits and an
/// explicitly signed exponent, e.g. `1.126e+11`.
///
/// ```rust
/// use girder_core::report::format::fmt_exp;
///
/// assert_eq!(fmt_exp(112_580_106_959.6, 3), "1.126e+11");
/// assert_eq!(fmt_exp(0.000_123_4, 2), "1.23e-4");
/// ```
pub fn fmt_exp(x: f64, digits: usize) -> String {
    if !x.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let raw = format!("{:.*e}", digits, x);
    match raw.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{}e{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}e+{}", mantissa, exp),
        None => raw,
    }
}

/// Format with exactly `decimals` fraction digits, no grouping.
pub fn fmt_fixed(x: f64, decimals: usize) -> String {
    if !x.is_finite() {
        return PLACEHOLDER.to_string();
    }
    format!("{:.*}", decimals, x)
}

/// Format a plain input dimension: integers without a fraction, otherwise
/// the shortest representation.
pub fn fmt_dimension(x: f64) -> String {
    if !x.is_finite() {
        return PLACEHOLDER.to_string();
    }
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(fmt_grouped(0.0, 0), "0");
        assert_eq!(fmt_grouped(999.0, 0), "999");
        assert_eq!(fmt_grouped(1000.0, 0), "1,000");
        assert_eq!(fmt_grouped(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(fmt_grouped(-12_345.5, 1), "-12,345.5");
        assert_eq!(fmt_grouped(0.546731, 6), "0.546731");
        assert_eq!(fmt_grouped(13.668275, 3), "13.668");
    }

    #[test]
    fn test_grouped_trims_trailing_zeros() {
        assert_eq!(fmt_grouped(250.0, 1), "250");
        assert_eq!(fmt_grouped(2.50, 3), "2.5");
    }

    #[test]
    fn test_grouped_negative_zero_after_rounding() {
        assert_eq!(fmt_grouped(-0.01, 1), "0");
    }

    #[test]
    fn test_exp() {
        assert_eq!(fmt_exp(2.0833e9, 3), "2.083e+9");
        assert_eq!(fmt_exp(-4.5e7, 1), "-4.5e+7");
        assert_eq!(fmt_exp(1.0, 3), "1.000e+0");
        assert_eq!(fmt_exp(2.5e-3, 1), "2.5e-3");
    }

    #[test]
    fn test_placeholder_for_non_finite() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(fmt_grouped(v, 2), PLACEHOLDER);
            assert_eq!(fmt_exp(v, 3), PLACEHOLDER);
            assert_eq!(fmt_fixed(v, 1), PLACEHOLDER);
            assert_eq!(fmt_dimension(v), PLACEHOLDER);
        }
    }

    #[test]
    fn test_fixed_and_dimension() {
        assert_eq!(fmt_fixed(627.6483, 1), "627.6");
        assert_eq!(fmt_fixed(0.546731, 6), "0.546731");
        assert_eq!(fmt_dimension(1372.0), "1372");
        assert_eq!(fmt_dimension(101.5), "101.5");
    }
}
