/// Currency detection stage.
///
/// Three detectors run in confidence order: explicit symbols, 3-letter
/// ISO codes, then currency name words. The first hit wins and is
/// recorded so later stages (and the default-currency logic) can see
/// how the currency was found.
use lazy_static::lazy_static;
use regex::Regex;

use crate::currency::{name_index, registry, symbols};
use crate::error::Result;
use crate::models::ParsedMoney;

lazy_static! {
    /// Any known currency symbol, longest alternative first
    static ref SYMBOL: Regex = Regex::new(&symbols::symbol_pattern()).unwrap();
    /// A candidate ISO code, validated against the registry on hit
    static ref CODE: Regex = Regex::new(r"\b[A-Za-z]{3}\b").unwrap();
    /// A candidate currency name word
    static ref NAME: Regex = Regex::new(r"\b[A-Za-z]{3,}\b").unwrap();
}

pub(crate) fn detect(text: &str, mut ctx: ParsedMoney) -> Result<ParsedMoney> {
    if ctx.currency.is_some() {
        return Ok(ctx);
    }
    if detect_symbol(text, &mut ctx) || detect_code(text, &mut ctx) || detect_name(text, &mut ctx)
    {
        tracing::debug!(
            "Currency detected: {:?} via {:?}",
            ctx.currency,
            ctx.matches.last().map(|m| m.detector)
        );
    }
    Ok(ctx)
}

fn detect_symbol(text: &str, ctx: &mut ParsedMoney) -> bool {
    let m = match SYMBOL.find(text) {
        Some(m) => m,
        None => return false,
    };
    let entry = match symbols::lookup(m.as_str()) {
        Some(entry) => entry,
        None => return false,
    };
    ctx.currency = Some(entry.canonical);
    ctx.record("currency-symbol", m.as_str(), m.start(), m.end());
    true
}

fn detect_code(text: &str, ctx: &mut ParsedMoney) -> bool {
    for m in CODE.find_iter(text) {
        if let Some(info) = registry::get_by_code(m.as_str()) {
            ctx.currency = Some(info.code);
            ctx.record("currency-code", m.as_str(), m.start(), m.end());
            return true;
        }
    }
    false
}

fn detect_name(text: &str, ctx: &mut ParsedMoney) -> bool {
    for m in NAME.find_iter(text) {
        if let Some(code) = name_index::lookup(m.as_str()) {
            ctx.currency = Some(code);
            ctx.record("currency-name", m.as_str(), m.start(), m.end());
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_in(text: &str) -> ParsedMoney {
        detect(text, ParsedMoney::new(text)).unwrap()
    }

    #[test]
    fn test_symbol_detection() {
        let ctx = detect_in("$100");
        assert_eq!(ctx.currency, Some("USD"));
        assert_eq!(ctx.matches[0].detector, "currency-symbol");
        assert_eq!(ctx.matches[0].text, "$");
        assert_eq!(ctx.matches[0].start, 0);
    }

    #[test]
    fn test_prefixed_symbol_wins_over_plain() {
        assert_eq!(detect_in("HK$50").currency, Some("HKD"));
        assert_eq!(detect_in("R$ 20").currency, Some("BRL"));
    }

    #[test]
    fn test_code_detection() {
        let ctx = detect_in("price is 25 EUR today");
        assert_eq!(ctx.currency, Some("EUR"));
        assert_eq!(ctx.matches[0].detector, "currency-code");
    }

    #[test]
    fn test_invalid_code_falls_through_to_names() {
        // "xyz" is not registered; "euros" resolves by name
        let ctx = detect_in("xyz 50 euros");
        assert_eq!(ctx.currency, Some("EUR"));
        assert_eq!(ctx.matches[0].detector, "currency-name");
    }

    #[test]
    fn test_name_detection() {
        let ctx = detect_in("twenty dollars");
        assert_eq!(ctx.currency, Some("USD"));
        assert_eq!(ctx.matches[0].detector, "currency-name");
        assert_eq!(ctx.matches[0].text, "dollars");
    }

    #[test]
    fn test_symbol_outranks_code_and_name() {
        let ctx = detect_in("send 50 euros to the € account");
        assert_eq!(ctx.currency, Some("EUR"));
        assert_eq!(ctx.matches[0].detector, "currency-symbol");
    }

    #[test]
    fn test_nothing_detected() {
        let ctx = detect_in("no money here");
        assert_eq!(ctx.currency, None);
        assert!(ctx.matches.is_empty());
    }

    #[test]
    fn test_existing_currency_left_alone() {
        let mut ctx = ParsedMoney::new("€5");
        ctx.currency = Some("USD");
        let ctx = detect("€5", ctx).unwrap();
        assert_eq!(ctx.currency, Some("USD"));
    }
}
