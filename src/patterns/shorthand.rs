/// Shorthand magnitude suffixes: "$1.5k", "10k", "2M USD", "£3bn".
///
/// Runs before every other amount parser so the suffix is never lost to
/// a plain digit match.
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::MAX_SAFE_AMOUNT;
use crate::currency::{registry, symbols};
use crate::error::{MoneyError, Result};
use crate::models::ParsedMoney;
use crate::patterns::Detection;

lazy_static! {
    /// Optional symbol, digits, magnitude suffix, optional ISO code
    static ref SHORTHAND: Regex = Regex::new(&format!(
        r"(?:({})\s*)?\b(\d+(?:\.\d+)?)\s*((?i:bn|[kmb]))\b(?:\s*([A-Za-z]{{3}})\b)?",
        symbols::symbol_pattern()
    ))
    .unwrap();
}

fn multiplier_of(suffix: &str) -> f64 {
    match suffix.to_lowercase().as_str() {
        "k" => 1_000.0,
        "m" => 1_000_000.0,
        // "b" and "bn"
        _ => 1_000_000_000.0,
    }
}

pub(crate) fn parse(text: &str, _ctx: &ParsedMoney) -> Result<Option<Detection>> {
    let caps = match SHORTHAND.captures(text) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let digits = &caps[2];
    let base: f64 = match digits.parse() {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };
    let amount = base * multiplier_of(&caps[3]);
    if !amount.is_finite() || amount > MAX_SAFE_AMOUNT {
        let offending = caps.get(0).map(|m| m.as_str()).unwrap_or(digits);
        return Err(MoneyError::Overflow(offending.trim().to_string()));
    }

    let mut currency = caps
        .get(1)
        .and_then(|m| symbols::lookup(m.as_str()))
        .map(|entry| entry.canonical);
    let mut end = match caps.get(3) {
        Some(m) => m.end(),
        None => return Ok(None),
    };
    if let Some(code) = caps.get(4) {
        // A trailing three-letter word only counts when it is a real
        // code: "10k USD" yes, "10k fee" no
        if let Some(info) = registry::get_by_code(code.as_str()) {
            if currency.is_none() {
                currency = Some(info.code);
            }
            end = code.end();
        }
    }
    let start = match caps.get(1).or_else(|| caps.get(2)) {
        Some(m) => m.start(),
        None => return Ok(None),
    };

    Ok(Some(Detection {
        amount,
        currency,
        start,
        end,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fresh(text: &str) -> Option<Detection> {
        parse(text, &ParsedMoney::new(text)).unwrap()
    }

    #[test]
    fn test_bare_shorthand() {
        let det = parse_fresh("10k").unwrap();
        assert_eq!(det.amount, 10_000.0);
        assert_eq!(det.currency, None);
    }

    #[test]
    fn test_symbol_shorthand() {
        let det = parse_fresh("$1.5k").unwrap();
        assert_eq!(det.amount, 1500.0);
        assert_eq!(det.currency, Some("USD"));
        assert_eq!((det.start, det.end), (0, 5));
    }

    #[test]
    fn test_all_suffixes() {
        assert_eq!(parse_fresh("2k").unwrap().amount, 2_000.0);
        assert_eq!(parse_fresh("2m").unwrap().amount, 2_000_000.0);
        assert_eq!(parse_fresh("2b").unwrap().amount, 2_000_000_000.0);
        assert_eq!(parse_fresh("2bn").unwrap().amount, 2_000_000_000.0);
        assert_eq!(parse_fresh("2M").unwrap().amount, 2_000_000.0);
    }

    #[test]
    fn test_trailing_code() {
        let det = parse_fresh("raised 10k USD so far").unwrap();
        assert_eq!(det.amount, 10_000.0);
        assert_eq!(det.currency, Some("USD"));
    }

    #[test]
    fn test_trailing_word_is_not_a_code() {
        let det = parse_fresh("10k fee").unwrap();
        assert_eq!(det.currency, None);
        assert_eq!(&"10k fee"[det.start..det.end], "10k");
    }

    #[test]
    fn test_symbol_wins_over_trailing_code() {
        let det = parse_fresh("€2m USD").unwrap();
        assert_eq!(det.currency, Some("EUR"));
    }

    #[test]
    fn test_suffix_must_be_word_bounded() {
        assert!(parse_fresh("10kg of rice").is_none());
        assert!(parse_fresh("x10k").is_none());
    }

    #[test]
    fn test_overflow() {
        let err = parse("9999999999999999k", &ParsedMoney::new("x")).unwrap_err();
        assert!(matches!(err, MoneyError::Overflow(_)));
    }
}
