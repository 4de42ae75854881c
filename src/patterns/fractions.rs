/// Fractional magnitude phrases.
///
/// Handles "half", "quarter million", "three quarters of a billion" and
/// the like. A multiplier may precede the fraction word and a magnitude
/// word may follow it, optionally joined by "of a". Like the worded
/// number converter, this is all-or-nothing over its input.
use crate::config::MAX_SAFE_AMOUNT;
use crate::error::{MoneyError, Result};
use crate::models::ParsedMoney;
use crate::patterns::{number_words, Detection};

const FRACTION_WORDS: &[(&str, f64)] = &[
    ("half", 0.5),
    ("halves", 0.5),
    ("quarter", 0.25),
    ("quarters", 0.25),
    ("third", 1.0 / 3.0),
    ("thirds", 1.0 / 3.0),
];

/// Value of a fraction word, if it is one.
pub(crate) fn fraction_value_of(word: &str) -> Option<f64> {
    FRACTION_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
}

/// Convert a complete phrase to its value.
///
/// Grammar: `[multiplier] fraction [["of"] ["a"|"an"] magnitude]`.
/// When the two-token form is ambiguous, the multiplier reading wins:
/// "two thirds" is 2 × 1/3, never 2 × 1000-ish.
pub fn convert(text: &str) -> Result<Option<f64>> {
    let words: Vec<String> = text
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect();

    // Locate the fraction word
    let idx = match words
        .iter()
        .position(|w| fraction_value_of(w).is_some())
    {
        Some(idx) => idx,
        None => return Ok(None),
    };
    let fraction = match fraction_value_of(&words[idx]) {
        Some(f) => f,
        None => return Ok(None),
    };

    // Multiplier before the fraction: "three quarters", "a quarter"
    let multiplier = if idx == 0 {
        1.0
    } else if words[..idx].iter().all(|w| matches!(w.as_str(), "a" | "an")) {
        1.0
    } else if let Some(value) = multiplier_of(&words[..idx])? {
        value
    } else {
        return Ok(None);
    };

    // Optional "of a <magnitude>" tail: "quarter million",
    // "half of a billion". The connectors are only valid when a
    // magnitude actually follows.
    let mut rest = &words[idx + 1..];
    let mut saw_connector = false;
    if rest.first().map(|w| w == "of").unwrap_or(false) {
        rest = &rest[1..];
        saw_connector = true;
    }
    if rest
        .first()
        .map(|w| matches!(w.as_str(), "a" | "an"))
        .unwrap_or(false)
    {
        rest = &rest[1..];
        saw_connector = true;
    }

    let value = match rest {
        [] if !saw_connector => multiplier * fraction,
        [magnitude] => match number_words::magnitude_of(magnitude) {
            Some(m) => multiplier * fraction * m,
            None => return Ok(None),
        },
        _ => return Ok(None),
    };

    if value > MAX_SAFE_AMOUNT {
        return Err(MoneyError::Overflow(text.trim().to_string()));
    }
    Ok(Some(value))
}

fn multiplier_of(words: &[String]) -> Result<Option<f64>> {
    // Single digit token ("3 quarters") or a worded number
    if let [single] = words {
        if let Ok(value) = single.parse::<f64>() {
            return Ok(Some(value));
        }
    }
    number_words::convert(&words.join(" "))
}

/// Sub-parser adapter: the whole expression must read as a fraction
/// phrase.
pub(crate) fn parse(text: &str, _ctx: &ParsedMoney) -> Result<Option<Detection>> {
    let value = match convert(text)? {
        Some(value) => value,
        None => return Ok(None),
    };
    let start = text.len() - text.trim_start().len();
    let end = start + text.trim().len();
    Ok(Some(Detection {
        amount: value,
        currency: None,
        start,
        end,
    }))
}

/// Regex fragment matching any single fraction word.
pub(crate) fn vocab_pattern() -> String {
    let mut words: Vec<&str> = FRACTION_WORDS.iter().map(|(w, _)| *w).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    format!("(?:{})", words.join("|"))
}
