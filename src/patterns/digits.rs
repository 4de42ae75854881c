/// Digit amounts, bare or attached to a currency mark.
///
/// Finds the leftmost digit amount in the expression, preferring forms
/// with an attached symbol or ISO code over bare digits so that
/// "paid $5 of 300" reads as 5 dollars. The digit token itself is
/// handed to the regional classifier.
use lazy_static::lazy_static;
use regex::Regex;

use crate::currency::{registry, symbols};
use crate::error::Result;
use crate::models::ParsedMoney;
use crate::patterns::regional::{self, NumberFormat};
use crate::patterns::Detection;

/// Digit token with optional grouping: plain runs, separator-joined
/// runs, and space-grouped French runs (groups of exactly three).
pub(crate) const NUM_PATTERN: &str =
    r"(?:\d{1,3}(?: \d{3})+(?:,\d+)?|\d+(?:['.,]\d+)+|\d+)";

lazy_static! {
    /// Symbol directly before an amount: $100, US$ 1,234.56
    static ref SYMBOL_THEN_NUMBER: Regex = Regex::new(&format!(
        r"({})\s*({})",
        symbols::symbol_pattern(),
        NUM_PATTERN
    ))
    .unwrap();

    /// Amount directly before a symbol: 100$, 1.234,56 €
    static ref NUMBER_THEN_SYMBOL: Regex = Regex::new(&format!(
        r"({})\s*({})",
        NUM_PATTERN,
        symbols::symbol_pattern()
    ))
    .unwrap();

    /// ISO code directly before an amount: USD 100, EUR1.000,00
    static ref CODE_THEN_NUMBER: Regex = Regex::new(&format!(
        r"\b([A-Za-z]{{3}})\s*({})",
        NUM_PATTERN
    ))
    .unwrap();

    /// Amount directly before an ISO code: 100 USD
    static ref NUMBER_THEN_CODE: Regex = Regex::new(&format!(
        r"({})\s*([A-Za-z]{{3}})\b",
        NUM_PATTERN
    ))
    .unwrap();

    /// Bare amount with no currency mark
    static ref BARE_NUMBER: Regex = Regex::new(NUM_PATTERN).unwrap();
}

pub(crate) fn parse(text: &str, ctx: &ParsedMoney) -> Result<Option<Detection>> {
    // Symbol-attached forms first
    if let Some(caps) = SYMBOL_THEN_NUMBER.captures(text) {
        if let Some(detection) = symbol_detection(ctx, &caps, 1, 2)? {
            return Ok(Some(detection));
        }
    }
    if let Some(caps) = NUMBER_THEN_SYMBOL.captures(text) {
        if let Some(detection) = symbol_detection(ctx, &caps, 2, 1)? {
            return Ok(Some(detection));
        }
    }

    // Code-attached forms; the three-letter group must be a real code
    for caps in CODE_THEN_NUMBER.captures_iter(text) {
        if registry::get_by_code(&caps[1]).is_none() {
            continue;
        }
        if let Some(detection) = code_detection(&caps, 1, 2)? {
            return Ok(Some(detection));
        }
    }
    for caps in NUMBER_THEN_CODE.captures_iter(text) {
        if registry::get_by_code(&caps[2]).is_none() {
            continue;
        }
        if let Some(detection) = code_detection(&caps, 2, 1)? {
            return Ok(Some(detection));
        }
    }

    // Bare digits
    if let Some(m) = BARE_NUMBER.find(text) {
        if let Some(grouped) = regional::parse_grouped(m.as_str())? {
            let currency = indian_override(ctx, grouped.format, None);
            return Ok(Some(Detection {
                amount: grouped.value,
                currency,
                start: m.start(),
                end: m.end(),
            }));
        }
    }

    Ok(None)
}

fn symbol_detection(
    ctx: &ParsedMoney,
    caps: &regex::Captures,
    symbol_group: usize,
    number_group: usize,
) -> Result<Option<Detection>> {
    let grouped = match regional::parse_grouped(&caps[number_group])? {
        Some(grouped) => grouped,
        None => return Ok(None),
    };
    let entry = symbols::lookup(&caps[symbol_group]);
    let mut currency = entry.map(|e| e.canonical);
    if let Some(code) = indian_override(ctx, grouped.format, entry) {
        currency = Some(code);
    }
    let whole = match caps.get(0) {
        Some(m) => m,
        None => return Ok(None),
    };
    Ok(Some(Detection {
        amount: grouped.value,
        currency,
        start: whole.start(),
        end: whole.end(),
    }))
}

fn code_detection(
    caps: &regex::Captures,
    code_group: usize,
    number_group: usize,
) -> Result<Option<Detection>> {
    let grouped = match regional::parse_grouped(&caps[number_group])? {
        Some(grouped) => grouped,
        None => return Ok(None),
    };
    let info = match registry::get_by_code(&caps[code_group]) {
        Some(info) => info,
        None => return Ok(None),
    };
    let whole = match caps.get(0) {
        Some(m) => m,
        None => return Ok(None),
    };
    Ok(Some(Detection {
        amount: grouped.value,
        currency: Some(info.code),
        start: whole.start(),
        end: whole.end(),
    }))
}

/// Indian-format override: an amount grouped the Indian way re-resolves
/// an ambiguous rupee-family symbol to INR. Checks the symbol attached
/// to this match first, then a symbol the currency stage found earlier.
fn indian_override(
    ctx: &ParsedMoney,
    format: NumberFormat,
    attached: Option<&'static symbols::SymbolEntry>,
) -> Option<&'static str> {
    if format != NumberFormat::Indian {
        return None;
    }
    if let Some(entry) = attached {
        if entry.is_shared_with("INR") {
            return Some("INR");
        }
        return None;
    }
    let earlier = ctx.last_match_of("currency-symbol")?;
    let entry = symbols::lookup(&earlier.text)?;
    if entry.is_shared_with("INR") {
        Some("INR")
    } else {
        None
    }
}
