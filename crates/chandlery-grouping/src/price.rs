//! Price string parsing shared by grouping, storage and catalog filtering.

use std::sync::LazyLock;

use regex::Regex;

use crate::vocab::CURRENCY_SYMBOLS;

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").expect("valid leading number regex")
});

/// Parses a scraped, currency-formatted price into a number.
///
/// Currency symbols and whitespace are dropped. A trailing comma followed by
/// exactly two digits is a European decimal comma (`"1.234,56"` → `1234.56`),
/// in which case dots are thousands separators; otherwise commas are
/// thousands separators (`"1,234.56"` → `1234.56`). The longest numeric
/// prefix is parsed, so `"45.00EUR"` → `45.0`.
///
/// Never fails: anything without a numeric prefix parses as `0.0`, which
/// callers treat as "no price".
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && !c.is_whitespace())
        .collect();

    let normalized = match european_split(&cleaned) {
        Some((whole, cents)) => {
            let whole: String = whole.chars().filter(|c| *c != '.' && *c != ',').collect();
            format!("{whole}.{cents}")
        }
        None => cleaned.replace(',', ""),
    };

    LEADING_NUMBER_RE
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parsed price when it is strictly positive.
#[must_use]
pub fn positive_price(raw: &str) -> Option<f64> {
    Some(parse_price(raw)).filter(|p| *p > 0.0)
}

/// Splits `"1.234,56"` into `("1.234", "56")` when the string ends in a
/// comma followed by exactly two digits.
fn european_split(s: &str) -> Option<(&str, &str)> {
    let (whole, cents) = s.rsplit_once(',')?;
    (cents.len() == 2 && cents.bytes().all(|b| b.is_ascii_digit())).then_some((whole, cents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euro_symbol() {
        assert!((parse_price("€45.00") - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn euro_symbol_with_cents() {
        assert!((parse_price("€15.82") - 15.82).abs() < f64::EPSILON);
    }

    #[test]
    fn european_thousands_and_decimal() {
        assert!((parse_price("1.234,56") - 1234.56).abs() < 1e-9);
    }

    #[test]
    fn european_decimal_comma_only() {
        assert!((parse_price("12,50 €") - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn comma_thousands_separator() {
        assert!((parse_price("$1,234.56") - 1234.56).abs() < 1e-9);
        assert!((parse_price("£1,234") - 1234.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inner_whitespace_ignored() {
        assert!((parse_price(" € 1 299.00 ") - 1299.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trailing_currency_code_ignored() {
        assert!((parse_price("45.00EUR") - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn garbage_is_zero() {
        assert!(parse_price("garbage").abs() < f64::EPSILON);
        assert!(parse_price("").abs() < f64::EPSILON);
        assert!(parse_price("€").abs() < f64::EPSILON);
    }

    #[test]
    fn positive_price_filters_zero_and_negative() {
        assert_eq!(positive_price("€20.00"), Some(20.0));
        assert_eq!(positive_price("€0.00"), None);
        assert_eq!(positive_price("-5"), None);
        assert_eq!(positive_price("call for price"), None);
    }
}
