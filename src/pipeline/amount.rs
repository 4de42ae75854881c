/// Amount detection stage.
///
/// Runs the pattern sub-parsers in a fixed priority order and keeps
/// the first hit. Specific, structure-rich patterns go first so a
/// digit-only parser never swallows part of a compound expression
/// ("75 cents" is 0.75, not 75).
use crate::error::Result;
use crate::models::ParsedMoney;
use crate::patterns::{
    digits, fractions, minor_units, number_words, phrase, shorthand, slang, AmountParser,
};

/// Sub-parsers in priority order.
const PARSERS: &[(&str, AmountParser)] = &[
    ("shorthand", shorthand::parse),
    ("slang", slang::parse),
    ("phrase", phrase::parse),
    ("minor-units", minor_units::parse),
    ("digits", digits::parse),
    ("fractions", fractions::parse),
    ("number-words", number_words::parse),
];

pub(crate) fn detect(text: &str, mut ctx: ParsedMoney) -> Result<ParsedMoney> {
    if ctx.amount.is_some() {
        return Ok(ctx);
    }

    for (name, parser) in PARSERS {
        let detection = match parser(text, &ctx)? {
            Some(detection) => detection,
            None => continue,
        };

        tracing::debug!("Amount parser '{}' matched: {}", name, detection.amount);
        ctx.amount = Some(detection.amount);
        if let Some(code) = detection.currency {
            // A pattern that names its own currency outranks whatever
            // the currency stage guessed from loose context.
            ctx.currency = Some(code);
        }
        ctx.record(
            name,
            &text[detection.start..detection.end],
            detection.start,
            detection.end,
        );
        return Ok(ctx);
    }

    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect_in(text: &str) -> ParsedMoney {
        detect(text, ParsedMoney::new(text)).unwrap()
    }

    #[test]
    fn test_priority_shorthand_over_digits() {
        let ctx = detect_in("raised 10k this round");
        assert_eq!(ctx.amount, Some(10_000.0));
        assert_eq!(ctx.matches[0].detector, "shorthand");
    }

    #[test]
    fn test_priority_minor_units_over_digits() {
        let ctx = detect_in("75 cents");
        assert_eq!(ctx.amount, Some(0.75));
        assert_eq!(ctx.currency, Some("USD"));
        assert_eq!(ctx.matches[0].detector, "minor-units");
    }

    #[test]
    fn test_priority_phrase_over_digits() {
        let ctx = detect_in("5 dollars and 20 cents");
        assert_eq!(ctx.amount, Some(5.2));
        assert_eq!(ctx.matches[0].detector, "phrase");
    }

    #[test]
    fn test_digits_as_general_fallback() {
        let ctx = detect_in("the invoice says 1,234.56 exactly");
        assert_eq!(ctx.amount, Some(1234.56));
        assert_eq!(ctx.matches[0].detector, "digits");
    }

    #[test]
    fn test_number_words_last() {
        let ctx = detect_in("two hundred thirty");
        assert_eq!(ctx.amount, Some(230.0));
        assert_eq!(ctx.matches[0].detector, "number-words");
    }

    #[test]
    fn test_atomic_currency_overrides_guess() {
        // the currency stage would have guessed TRY from "try"
        let mut ctx = ParsedMoney::new("try 100 dollars");
        ctx.currency = Some("TRY");
        let ctx = detect("try 100 dollars", ctx).unwrap();
        assert_eq!(ctx.currency, Some("USD"));
        assert_eq!(ctx.amount, Some(100.0));
    }

    #[test]
    fn test_detection_without_currency_keeps_guess() {
        let mut ctx = ParsedMoney::new("euro zone, pay 50");
        ctx.currency = Some("EUR");
        let ctx = detect("euro zone, pay 50", ctx).unwrap();
        assert_eq!(ctx.currency, Some("EUR"));
        assert_eq!(ctx.amount, Some(50.0));
    }

    #[test]
    fn test_no_amount() {
        let ctx = detect_in("nothing to charge");
        assert_eq!(ctx.amount, None);
        assert!(ctx.matches.is_empty());
    }

    #[test]
    fn test_existing_amount_left_alone() {
        let mut ctx = ParsedMoney::new("50");
        ctx.amount = Some(7.0);
        let ctx = detect("50", ctx).unwrap();
        assert_eq!(ctx.amount, Some(7.0));
    }
}
