/// Worded cardinal numbers.
///
/// Converts phrases like "four hundred twenty", "a hundred and five" or
/// "two million three hundred" into values. The converter is
/// all-or-nothing over its input: one unrecognized token means the text
/// is not a worded number.
use crate::config::MAX_SAFE_AMOUNT;
use crate::error::{MoneyError, Result};
use crate::models::ParsedMoney;
use crate::patterns::Detection;

const ONES: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
];

const TENS: &[(&str, f64)] = &[
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
];

/// Scale words that multiply and flush the running subtotal. "hundred"
/// is handled separately because it multiplies without flushing.
const MAGNITUDES: &[(&str, f64)] = &[
    ("thousand", 1_000.0),
    ("million", 1_000_000.0),
    ("billion", 1_000_000_000.0),
    ("trillion", 1_000_000_000_000.0),
];

/// Value of a ones or tens word ("seven" → 7, "ninety" → 90).
pub(crate) fn small_value_of(word: &str) -> Option<f64> {
    ONES.iter()
        .chain(TENS.iter())
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
}

/// Multiplier for a scale word, including "hundred".
pub(crate) fn magnitude_of(word: &str) -> Option<f64> {
    if word == "hundred" {
        return Some(100.0);
    }
    MAGNITUDES
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
}

/// Convert a complete phrase to its value.
///
/// Tokens accumulate into a subtotal; "hundred" multiplies the subtotal
/// in place; thousand/million/billion/trillion multiply it and flush it
/// into the total. An empty subtotal counts as one only at the start,
/// so "a hundred" is 100 while "thousand trillion" converts to nothing.
pub fn convert(text: &str) -> Result<Option<f64>> {
    let mut total = 0.0f64;
    let mut subtotal = 0.0f64;
    let mut seen_word = false;

    for raw in text.split(|c: char| c.is_whitespace() || c == '-') {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        // Articles and "and" carry no value: "a hundred and five"
        if matches!(word.as_str(), "a" | "an" | "and") {
            continue;
        }
        if let Some(value) = small_value_of(&word) {
            subtotal += value;
            seen_word = true;
            continue;
        }
        if word == "hundred" {
            if subtotal == 0.0 {
                subtotal = 1.0;
            }
            subtotal *= 100.0;
            seen_word = true;
            continue;
        }
        if let Some(multiplier) = lookup_magnitude(&word) {
            if subtotal == 0.0 {
                if total != 0.0 {
                    // "thousand" with nothing accumulated after a flush
                    // ("two million thousand") is not a number
                    return Ok(None);
                }
                subtotal = 1.0;
            }
            total += subtotal * multiplier;
            subtotal = 0.0;
            seen_word = true;
            if total > MAX_SAFE_AMOUNT {
                return Err(MoneyError::Overflow(text.trim().to_string()));
            }
            continue;
        }
        return Ok(None);
    }

    if !seen_word {
        return Ok(None);
    }
    let value = total + subtotal;
    if value > MAX_SAFE_AMOUNT {
        return Err(MoneyError::Overflow(text.trim().to_string()));
    }
    Ok(Some(value))
}

fn lookup_magnitude(word: &str) -> Option<f64> {
    MAGNITUDES
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, v)| *v)
}

/// Sub-parser adapter: the whole expression must read as a worded
/// number.
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

/// Regex fragment matching any single number word.
pub(crate) fn vocab_pattern() -> String {
    let mut words: Vec<&str> = ONES
        .iter()
        .chain(TENS.iter())
        .chain(MAGNITUDES.iter())
        .map(|(w, _)| *w)
        .collect();
    words.push("hundred");
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    format!("(?:{})", words.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Basic Conversion Tests =====

    #[test]
    fn test_single_words() {
        assert_eq!(convert("zero").unwrap(), Some(0.0));
        assert_eq!(convert("seven").unwrap(), Some(7.0));
        assert_eq!(convert("nineteen").unwrap(), Some(19.0));
        assert_eq!(convert("ninety").unwrap(), Some(90.0));
    }

    #[test]
    fn test_tens_and_ones() {
        assert_eq!(convert("twenty three").unwrap(), Some(23.0));
        assert_eq!(convert("twenty-three").unwrap(), Some(23.0));
        assert_eq!(convert("ninety nine").unwrap(), Some(99.0));
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(convert("hundred").unwrap(), Some(100.0));
        assert_eq!(convert("a hundred").unwrap(), Some(100.0));
        assert_eq!(convert("four hundred twenty").unwrap(), Some(420.0));
        assert_eq!(convert("a hundred and five").unwrap(), Some(105.0));
        assert_eq!(convert("twenty three hundred").unwrap(), Some(2300.0));
    }

    #[test]
    fn test_magnitudes() {
        assert_eq!(convert("a thousand").unwrap(), Some(1000.0));
        assert_eq!(convert("two million").unwrap(), Some(2_000_000.0));
        assert_eq!(
            convert("two million three hundred").unwrap(),
            Some(2_000_300.0)
        );
        assert_eq!(
            convert("one million five hundred thousand").unwrap(),
            Some(1_500_000.0)
        );
        assert_eq!(
            convert("two hundred three thousand").unwrap(),
            Some(203_000.0)
        );
    }

    #[test]
    fn test_case_and_punctuation_tolerance() {
        assert_eq!(convert("Twenty Three").unwrap(), Some(23.0));
        assert_eq!(convert("two hundred,").unwrap(), Some(200.0));
    }

    // ===== Rejection Tests =====

    #[test]
    fn test_unknown_token_rejects_whole_input() {
        assert_eq!(convert("two hundred bananas").unwrap(), None);
        assert_eq!(convert("i owe two hundred").unwrap(), None);
        assert_eq!(convert("100").unwrap(), None);
    }

    #[test]
    fn test_empty_and_filler_only() {
        assert_eq!(convert("").unwrap(), None);
        assert_eq!(convert("   ").unwrap(), None);
        assert_eq!(convert("a and an").unwrap(), None);
    }

    #[test]
    fn test_dangling_magnitude_rejected() {
        assert_eq!(convert("two million thousand").unwrap(), None);
        assert_eq!(convert("trillion trillion").unwrap(), None);
    }

    // ===== Overflow Tests =====

    #[test]
    fn test_overflow() {
        // 9900 trillion is past 2^53 - 1
        let err = convert("ninety nine hundred trillion").unwrap_err();
        assert!(matches!(err, MoneyError::Overflow(_)));
    }

    #[test]
    fn test_largest_plain_phrase_is_safe() {
        let value = convert("nine hundred ninety nine trillion").unwrap();
        assert_eq!(value, Some(999_000_000_000_000.0));
    }

    // ===== Helper Tests =====

    #[test]
    fn test_magnitude_of() {
        assert_eq!(magnitude_of("hundred"), Some(100.0));
        assert_eq!(magnitude_of("billion"), Some(1_000_000_000.0));
        assert_eq!(magnitude_of("bananas"), None);
    }

    #[test]
    fn test_vocab_pattern_compiles() {
        let re = regex::Regex::new(&format!("^{}$", vocab_pattern())).unwrap();
        assert!(re.is_match("seventeen"));
        assert!(re.is_match("trillion"));
        assert!(!re.is_match("sevenish"));
    }
}
