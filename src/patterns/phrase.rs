/// Contextual phrase combinator.
///
/// Composes an optional article, a quantity expression, a currency
/// token and an optional minor-unit suffix into one value: "a dollar
/// and 23 cents", "quarter million dollars", "5 pounds 20 pence",
/// "a dollar fifty". The most structurally involved of the amount
/// parsers, and the one that runs before any digit-only pattern gets
/// a chance to misread a compound amount.
use crate::currency::{name_index, registry, CurrencyInfo};
use crate::error::{MoneyError, Result};
use crate::models::ParsedMoney;
use crate::patterns::{minor_units, number_words, tokenize, trailing_quantity, Detection, Token};

pub(crate) fn parse(text: &str, _ctx: &ParsedMoney) -> Result<Option<Detection>> {
    let tokens = tokenize(text);

    for (i, token) in tokens.iter().enumerate() {
        let word = token.lower();
        let code = match currency_of_word(&word) {
            Some(code) => code,
            None => continue,
        };
        let info = match registry::get_by_code(code) {
            Some(info) => info,
            None => continue,
        };

        // Pull neighbouring words of the same currency name into the
        // match: "united states dollars", "pounds sterling".
        let name_first = extend_left(&tokens, i, info);
        let name_last = extend_right(&tokens, i, info);

        let (mut amount, start) = match trailing_quantity(text, &tokens[..name_first])? {
            Some(quantity) => quantity,
            None => match tokens[..name_first].last() {
                // "the dollar" reads as one of it; a plural like
                // "the euros" names the currency without a quantity
                Some(article) if article.lower() == "the" && !word.ends_with('s') => {
                    (1.0, article.start)
                }
                _ => continue,
            },
        };
        let mut end = tokens[name_last].end;

        if let Some(minor) = minor_suffix(text, &tokens[name_last + 1..], info)? {
            amount += minor.value / info.minor_scale();
            end = minor.end;
        }

        return Ok(Some(Detection {
            amount,
            currency: Some(code),
            start,
            end,
        }));
    }

    Ok(None)
}

/// Resolve a token to a currency: an indexed name word, or a 3-letter
/// ISO code written as a word.
fn currency_of_word(word: &str) -> Option<&'static str> {
    if let Some(code) = name_index::lookup(word) {
        return Some(code);
    }
    if word.len() == 3 && word.chars().all(|c| c.is_ascii_alphabetic()) {
        if let Some(info) = registry::get_by_code(word) {
            return Some(info.code);
        }
    }
    None
}

fn is_name_word(word: &str, info: &CurrencyInfo) -> bool {
    let singular = word.strip_suffix('s').unwrap_or(word);
    info.name
        .split([' ', '-'])
        .any(|w| w.eq_ignore_ascii_case(word) || w.eq_ignore_ascii_case(singular))
}

/// Index of the first token of the currency name, swallowing leading
/// words of the same name ("united states" before "dollars").
fn extend_left(tokens: &[Token], i: usize, info: &CurrencyInfo) -> usize {
    let mut first = i;
    while first > 0 {
        let word = tokens[first - 1].lower();
        if is_name_word(&word, info) {
            first -= 1;
        } else {
            break;
        }
    }
    first
}

/// Index of the last token of the currency name ("sterling" after
/// "pounds", "dollars" after "zealand").
fn extend_right(tokens: &[Token], i: usize, info: &CurrencyInfo) -> usize {
    let mut last = i;
    while last + 1 < tokens.len() {
        let word = tokens[last + 1].lower();
        if is_name_word(&word, info) {
            last += 1;
        } else {
            break;
        }
    }
    last
}

struct MinorSuffix {
    value: f64,
    end: usize,
}

/// Read a minor amount following the currency name, joined by "and" or
/// plain juxtaposition. An explicit minor-unit word commits the match:
/// from there a zero-decimal major currency, a value at or past the
/// scale, or a unit word the table does not know is a structural error.
/// A number followed by another currency word starts a new expression
/// and is left alone; a bare trailing number only counts when it fits
/// under the scale.
fn minor_suffix(
    text: &str,
    tokens: &[Token],
    info: &CurrencyInfo,
) -> Result<Option<MinorSuffix>> {
    let mut rest = tokens;
    if let Some(first) = rest.first() {
        if first.lower() == "and" {
            rest = &rest[1..];
        }
    }

    for take in [2usize, 1] {
        if rest.len() < take {
            continue;
        }
        let value = match minor_value(text, &rest[..take]) {
            Some(value) => value,
            None => continue,
        };

        if let Some(unit) = rest.get(take) {
            let unit_word = unit.lower();
            if minor_units::lookup(&unit_word).is_some() {
                if info.decimal_digits == 0 {
                    return Err(MoneyError::MinorUnitNotSupported(unit.text.to_string()));
                }
                if value >= info.minor_scale() {
                    let fragment = &text[rest[0].start..unit.end];
                    return Err(MoneyError::MinorUnitTooLarge(fragment.to_string()));
                }
                return Ok(Some(MinorSuffix {
                    value,
                    end: unit.end,
                }));
            }
            if unit_word.chars().all(|c| c.is_alphabetic()) {
                // "5 dollars and 30 pounds" names a second currency,
                // not a sub-unit of the first
                if currency_of_word(&unit_word).is_some() {
                    return Ok(None);
                }
                return Err(MoneyError::UnknownMinorUnit(unit.text.to_string()));
            }
        }

        if info.decimal_digits > 0 && value > 0.0 && value < info.minor_scale() {
            return Ok(Some(MinorSuffix {
                value,
                end: rest[take - 1].end,
            }));
        }
    }

    Ok(None)
}

/// A small whole number spelled in digits ("23") or words ("twenty
/// three"). At most two tokens are ever offered.
fn minor_value(text: &str, tokens: &[Token]) -> Option<f64> {
    if let [single] = tokens {
        if single.text.chars().all(|c| c.is_ascii_digit()) {
            return single.text.parse::<f64>().ok();
        }
    }
    let first = tokens.first()?;
    let last = tokens.last()?;
    match number_words::convert(&text[first.start..last.end]) {
        Ok(Some(value)) if value >= 0.0 && value.fract() == 0.0 => Some(value),
        _ => None,
    }
}
