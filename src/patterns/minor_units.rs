/// Standalone minor-unit amounts.
///
/// "75 cents" reads as 0.75 of the implied currency: cent words imply
/// US dollars, penny words imply pounds sterling. Compound phrases like
/// "5 dollars and 20 cents" are claimed by the phrase combinator before
/// this parser runs.
use lazy_static::lazy_static;
use regex::Regex;

use crate::currency::registry;
use crate::error::{MoneyError, Result};
use crate::models::ParsedMoney;
use crate::patterns::{tokenize, trailing_quantity, Detection};

/// Minor-unit word → implied ISO code.
const MINOR_UNITS: &[(&str, &str)] = &[
    ("cent", "USD"),
    ("cents", "USD"),
    ("penny", "GBP"),
    ("pennies", "GBP"),
    ("pence", "GBP"),
];

lazy_static! {
    /// Any known minor-unit word on its own word boundary
    static ref MINOR_WORD: Regex =
        Regex::new(&format!(r"(?i)\b(?:{})\b", word_pattern())).unwrap();
}

/// Quiet membership check used while composing phrases.
pub(crate) fn lookup(word: &str) -> Option<&'static str> {
    let lowered = word.to_lowercase();
    MINOR_UNITS
        .iter()
        .find(|(w, _)| *w == lowered)
        .map(|(_, code)| *code)
}

/// Currency a minor-unit word stands for when no major currency is
/// named. Erring contract for callers that have already committed to
/// the word being a minor unit.
pub(crate) fn implied_currency(word: &str) -> Result<&'static str> {
    lookup(word).ok_or_else(|| MoneyError::UnknownMinorUnit(word.to_string()))
}

/// Alternation of every minor-unit word, longest first.
pub(crate) fn word_pattern() -> String {
    let mut words: Vec<&str> = MINOR_UNITS.iter().map(|(w, _)| *w).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.join("|")
}

pub(crate) fn parse(text: &str, _ctx: &ParsedMoney) -> Result<Option<Detection>> {
    let m = match MINOR_WORD.find(text) {
        Some(m) => m,
        None => return Ok(None),
    };
    let code = implied_currency(m.as_str())?;
    let info = match registry::get_by_code(code) {
        Some(info) => info,
        None => return Ok(None),
    };

    let before = &text[..m.start()];
    let (value, start) = match trailing_quantity(before, &tokenize(before))? {
        Some(quantity) => quantity,
        None => return Ok(None),
    };

    Ok(Some(Detection {
        amount: value / info.minor_scale(),
        currency: Some(code),
        start,
        end: m.end(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fresh(text: &str) -> Option<Detection> {
        parse(text, &ParsedMoney::new(text)).unwrap()
    }

    #[test]
    fn test_cents_imply_usd() {
        let det = parse_fresh("it costs 75 cents").unwrap();
        assert_eq!(det.amount, 0.75);
        assert_eq!(det.currency, Some("USD"));
        assert_eq!(&"it costs 75 cents"[det.start..det.end], "75 cents");
    }

    #[test]
    fn test_penny_words_imply_gbp() {
        let det = parse_fresh("20 pence").unwrap();
        assert_eq!(det.amount, 0.2);
        assert_eq!(det.currency, Some("GBP"));

        let det = parse_fresh("a penny").unwrap();
        assert_eq!(det.amount, 0.01);
        assert_eq!(det.currency, Some("GBP"));
    }

    #[test]
    fn test_worded_quantity() {
        let det = parse_fresh("seventy five cents").unwrap();
        assert_eq!(det.amount, 0.75);
    }

    #[test]
    fn test_standalone_value_is_uncapped() {
        // "150 cents" standing alone is simply 1.5 dollars
        let det = parse_fresh("150 cents").unwrap();
        assert_eq!(det.amount, 1.5);
    }

    #[test]
    fn test_bare_word_without_quantity() {
        assert!(parse_fresh("cents").is_none());
        assert!(parse_fresh("counting pennies").is_none());
    }

    #[test]
    fn test_implied_currency_contract() {
        assert_eq!(implied_currency("CENTS").unwrap(), "USD");
        let err = implied_currency("centavos").unwrap_err();
        assert_eq!(err, MoneyError::UnknownMinorUnit("centavos".to_string()));
    }

    #[test]
    fn test_lookup_is_quiet() {
        assert_eq!(lookup("pence"), Some("GBP"));
        assert_eq!(lookup("stuff"), None);
    }
}
