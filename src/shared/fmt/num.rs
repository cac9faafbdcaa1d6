//! Number formatting utilities for human-readable display.
//!
//! Works on already-rounded plain numeric strings (`-?\d+(\.\d+)?`).
//! For rounding, use the `decimal` sibling module.

/// Adds group separators to the integer part and swaps in the decimal separator.
///
/// Digits after the decimal point are kept as-is (no trimming), so a caller that
/// asked for one fraction digit always gets one.
pub fn group_digits(formatted: &str, group_separator: &str, decimal_separator: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let mut parts = unsigned.splitn(2, '.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let integer_part = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(group_separator);

    match fraction {
        Some(f) => format!("{}{}{}{}", sign, integer_part, decimal_separator, f),
        None => format!("{}{}", sign, integer_part),
    }
}

/// Parses a grouped display number back into an `f64`.
///
/// Strips everything except digits, the decimal separator and a leading minus.
pub fn parse_grouped(display: &str, decimal_separator: char) -> Option<f64> {
    let negative = display.trim_start().starts_with('-');
    let cleaned: String = display
        .chars()
        .filter_map(|c| {
            if c.is_ascii_digit() {
                Some(c)
            } else if c == decimal_separator {
                Some('.')
            } else {
                None
            }
        })
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits_integers() {
        assert_eq!(group_digits("0", ",", "."), "0");
        assert_eq!(group_digits("123", ",", "."), "123");
        assert_eq!(group_digits("1000", ",", "."), "1,000");
        assert_eq!(group_digits("1234567", ",", "."), "1,234,567");
    }

    #[test]
    fn test_group_digits_keeps_fraction() {
        assert_eq!(group_digits("11664.0", ",", "."), "11,664.0");
        assert_eq!(group_digits("999.5", ",", "."), "999.5");
    }

    #[test]
    fn test_group_digits_negative() {
        assert_eq!(group_digits("-1000", ",", "."), "-1,000");
        assert_eq!(group_digits("-123456.7", ",", "."), "-123,456.7");
    }

    #[test]
    fn test_group_digits_custom_separators() {
        assert_eq!(group_digits("1234567.5", ".", ","), "1.234.567,5");
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(parse_grouped("৳11,664.0", '.'), Some(11664.0));
        assert_eq!(parse_grouped("-৳1,000", '.'), Some(-1000.0));
        assert_eq!(parse_grouped("৳", '.'), None);
    }
}
