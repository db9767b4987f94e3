use rust_decimal::Decimal;
use std::str::FromStr;

// ============================================================================
// Money Helpers - single fixed currency, two decimal places
// ============================================================================

/// Number of decimal places shown for every amount
pub const DISPLAY_SCALE: u32 = 2;

/// Parse operator-entered cash text into an amount.
///
/// Leading whitespace is skipped and the longest numeric prefix is read,
/// so `"10€"` is ten and `"2,5"` is two. The prefix may carry a sign, a
/// fractional part and an exponent (`"1e1"`). Negative amounts are kept so
/// that change can go below zero. Text with no numeric prefix yields `None`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let bytes = raw.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_digits = &bytes[int_start..pos];

    let mut frac_digits: &[u8] = &[];
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_digits = &bytes[frac_start..end];
        pos = end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let exponent = parse_exponent(&bytes[pos..]);

    let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        mantissa.push('-');
    }
    if int_digits.is_empty() {
        mantissa.push('0');
    } else {
        mantissa.push_str(std::str::from_utf8(int_digits).ok()?);
    }
    if !frac_digits.is_empty() {
        mantissa.push('.');
        mantissa.push_str(std::str::from_utf8(frac_digits).ok()?);
    }

    match exponent {
        Some(exp) => Decimal::from_scientific(&format!("{}e{}", mantissa, exp)).ok(),
        None => Decimal::from_str(&mantissa).ok(),
    }
}

/// Exponent suffix such as `e3` or `E-2`; ignored unless digits follow
fn parse_exponent(bytes: &[u8]) -> Option<i64> {
    if !matches!(bytes.first(), Some(b'e') | Some(b'E')) {
        return None;
    }

    let mut pos = 1;
    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == start {
        return None;
    }

    let value: i64 = std::str::from_utf8(&bytes[start..pos]).ok()?.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Format an amount with the currency symbol, e.g. `€8.00`
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount.round_dp(DISPLAY_SCALE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_amount("10"), Some(dec!(10)));
        assert_eq!(parse_amount("7.50"), Some(dec!(7.50)));
        assert_eq!(parse_amount("  20.5 "), Some(dec!(20.5)));
        assert_eq!(parse_amount("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_parse_reads_leading_number() {
        assert_eq!(parse_amount("10€"), Some(dec!(10)));
        assert_eq!(parse_amount("10 eur"), Some(dec!(10)));
        assert_eq!(parse_amount("2,5"), Some(dec!(2)));
        assert_eq!(parse_amount("7.5.1"), Some(dec!(7.5)));
        assert_eq!(parse_amount("5."), Some(dec!(5)));
    }

    #[test]
    fn test_parse_signs_and_fractions() {
        assert_eq!(parse_amount(".5"), Some(dec!(0.5)));
        assert_eq!(parse_amount("+3"), Some(dec!(3)));
        assert_eq!(parse_amount("-5"), Some(dec!(-5)));
        assert_eq!(parse_amount("-0.25"), Some(dec!(-0.25)));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_amount("1e1"), Some(dec!(10)));
        assert_eq!(parse_amount("2.5E-1"), Some(dec!(0.25)));
        assert_eq!(parse_amount("3e"), Some(dec!(3)));
        assert_eq!(parse_amount("3e+"), Some(dec!(3)));
    }

    #[test]
    fn test_parse_rejects_text_without_number() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("€10"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(8), "€"), "€8.00");
        assert_eq!(format_amount(dec!(2.5), "€"), "€2.50");
        assert_eq!(format_amount(dec!(0.125), "$"), "$0.12");
        assert_eq!(format_amount(Decimal::ZERO, "€"), "€0.00");
    }
}
