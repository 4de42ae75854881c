/// Colloquial currency terms with implied units.
///
/// "twenty bucks", "a quid", "half a grand", "a buck fifty". The slang
/// word pins both the currency and the unit value; an optional leading
/// quantity multiplies the unit and, for unit-value-one words only, a
/// trailing small number reads as cents.
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::MAX_SAFE_AMOUNT;
use crate::error::{MoneyError, Result};
use crate::models::ParsedMoney;
use crate::patterns::{number_words, tokenize, trailing_quantity, Detection, Token};

/// Slang word → (currency, value of one unit).
const SLANG: &[(&str, &str, f64)] = &[
    ("buck", "USD", 1.0),
    ("bucks", "USD", 1.0),
    ("quid", "GBP", 1.0),
    ("quids", "GBP", 1.0),
    ("fiver", "GBP", 5.0),
    ("fivers", "GBP", 5.0),
    ("tenner", "GBP", 10.0),
    ("tenners", "GBP", 10.0),
    ("grand", "USD", 1000.0),
    ("grands", "USD", 1000.0),
];

lazy_static! {
    /// Any known slang word on its own word boundary
    static ref SLANG_WORD: Regex =
        Regex::new(&format!(r"(?i)\b(?:{})\b", word_pattern())).unwrap();
}

/// Alternation of every slang word, longest first.
pub(crate) fn word_pattern() -> String {
    let mut words: Vec<&str> = SLANG.iter().map(|(w, _, _)| *w).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.join("|")
}

fn slang_entry(word: &str) -> Option<(&'static str, f64)> {
    let word = word.to_lowercase();
    SLANG
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|(_, code, unit)| (*code, *unit))
}

pub(crate) fn parse(text: &str, _ctx: &ParsedMoney) -> Result<Option<Detection>> {
    let m = match SLANG_WORD.find(text) {
        Some(m) => m,
        None => return Ok(None),
    };
    let (code, unit) = match slang_entry(m.as_str()) {
        Some(entry) => entry,
        None => return Ok(None),
    };

    let before = &text[..m.start()];
    let quantity = trailing_quantity(before, &tokenize(before))?;
    let (multiplier, start) = quantity.unwrap_or((1.0, m.start()));

    let mut amount = multiplier * unit;
    if !amount.is_finite() || amount > MAX_SAFE_AMOUNT {
        return Err(MoneyError::Overflow(text[start..m.end()].trim().to_string()));
    }

    // "a buck fifty": cents ride on unit-value-one words only
    let mut end = m.end();
    if unit == 1.0 {
        let after = &text[m.end()..];
        if let Some((cents, cents_end)) = cents_suffix(&tokenize(after)) {
            amount += cents / 100.0;
            end = m.end() + cents_end;
        }
    }

    Ok(Some(Detection {
        amount,
        currency: Some(code),
        start,
        end,
    }))
}

/// Read a trailing cents value from the first token or two: "fifty",
/// "fifty five", "50". Values at or past one hundred are not cents.
fn cents_suffix(tokens: &[Token]) -> Option<(f64, usize)> {
    let first = tokens.first()?;
    let word = first.lower();

    if let Ok(value) = word.parse::<f64>() {
        if value > 0.0 && value < 100.0 && value.fract() == 0.0 {
            return Some((value, first.end));
        }
        return None;
    }

    let tens = number_words::small_value_of(&word)?;
    if tens >= 100.0 {
        return None;
    }
    // "fifty five" but not "fifty eleven"
    if tens >= 20.0 && tens % 10.0 == 0.0 {
        if let Some(second) = tokens.get(1) {
            if let Some(ones) = number_words::small_value_of(&second.lower()) {
                if ones > 0.0 && ones < 10.0 {
                    return Some((tens + ones, second.end));
                }
            }
        }
    }
    if tens > 0.0 {
        Some((tens, first.end))
    } else {
        None
    }
}
