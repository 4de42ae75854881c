/// Amount pattern parsers.
///
/// Each sub-parser inspects an expression for one family of money
/// patterns and either produces a `Detection`, reports that nothing
/// matched, or fails when a pattern matched but is structurally
/// invalid. The amount stage runs them in a fixed priority order.
pub mod digits;
pub mod fractions;
pub mod minor_units;
pub mod number_words;
pub mod phrase;
pub mod regional;
pub mod shorthand;
pub mod slang;

use crate::config::MAX_SAFE_AMOUNT;
use crate::error::{MoneyError, Result};
use crate::models::ParsedMoney;

/// A successful sub-parser hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Amount in major units, non-negative
    pub amount: f64,
    /// Currency supplied atomically with the amount, when the pattern
    /// carries one ("$5k", "twenty bucks", "five euros")
    pub currency: Option<&'static str>,
    /// Byte span of the matched fragment within the expression
    pub start: usize,
    pub end: usize,
}

/// Signature shared by every amount sub-parser.
pub type AmountParser = fn(&str, &ParsedMoney) -> Result<Option<Detection>>;

/// A whitespace-delimited token, trimmed of surrounding punctuation,
/// with its byte span in the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Split text into position-tracked tokens. Leading and trailing
/// punctuation is trimmed from each token; hyphens and apostrophes
/// inside a token survive ("twenty-three", "1'234").
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(start) = run_start.take() {
                push_trimmed(text, start, idx, &mut tokens);
            }
        } else if run_start.is_none() {
            run_start = Some(idx);
        }
    }
    if let Some(start) = run_start {
        push_trimmed(text, start, text.len(), &mut tokens);
    }

    tokens
}

fn push_trimmed<'a>(text: &'a str, start: usize, end: usize, tokens: &mut Vec<Token<'a>>) {
    let raw = &text[start..end];
    let after_front = raw.trim_start_matches(|c: char| !c.is_alphanumeric());
    let trimmed = after_front.trim_end_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        return;
    }
    let offset = raw.len() - after_front.len();
    tokens.push(Token {
        text: trimmed,
        start: start + offset,
        end: start + offset + trimmed.len(),
    });
}

/// Connective tokens allowed to trail a numeric phrase without adding
/// value ("three quarters of a" → "three quarters").
fn is_trailing_filler(word: &str) -> bool {
    matches!(word, "a" | "an" | "of" | "and" | "the")
}

/// Parse the longest trailing run of `tokens` that reads as a number:
/// grouped digits, a worded number, a fraction phrase, or a hybrid like
/// "2.5 million". A lone trailing article counts as one ("a dollar").
///
/// Returns the value and the byte offset where the run starts.
pub(crate) fn trailing_quantity(text: &str, tokens: &[Token]) -> Result<Option<(f64, usize)>> {
    for i in 0..tokens.len() {
        let mut slice = &tokens[i..];
        while let Some(last) = slice.last() {
            if is_trailing_filler(&last.lower()) {
                slice = &slice[..slice.len() - 1];
            } else {
                break;
            }
        }
        let (first, last) = match (slice.first(), slice.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => continue,
        };
        let sub = &text[first.start..last.end];
        if let Some(value) = quantity_of(sub)? {
            return Ok(Some((value, tokens[i].start)));
        }
    }

    // "a dollar", "an euro": a bare article right before the currency
    // word stands for one unit.
    if let Some(last) = tokens.last() {
        if matches!(last.lower().as_str(), "a" | "an") {
            return Ok(Some((1.0, last.start)));
        }
    }

    Ok(None)
}

/// Interpret a complete phrase as a number, trying fraction phrases,
/// worded numbers, "<digits> <magnitude>" hybrids and grouped digits in
/// that order.
pub(crate) fn quantity_of(text: &str) -> Result<Option<f64>> {
    if let Some(value) = fractions::convert(text)? {
        return Ok(Some(value));
    }
    if let Some(value) = number_words::convert(text)? {
        return Ok(Some(value));
    }

    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    match words.as_slice() {
        [single] => Ok(regional::parse_grouped(single)?.map(|g| g.value)),
        [digits, magnitude] => {
            let multiplier = match number_words::magnitude_of(&magnitude.to_lowercase()) {
                Some(m) => m,
                None => return Ok(None),
            };
            let base = match regional::parse_grouped(digits)? {
                Some(g) => g.value,
                None => return Ok(None),
            };
            let value = base * multiplier;
            if value > MAX_SAFE_AMOUNT {
                return Err(MoneyError::Overflow(text.trim().to_string()));
            }
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_texts(text: &str) -> Vec<&str> {
        tokenize(text).iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_trims_punctuation() {
        assert_eq!(token_texts("two hundred, please."), vec!["two", "hundred", "please"]);
        assert_eq!(token_texts("(50) left"), vec!["50", "left"]);
    }

    #[test]
    fn test_tokenize_keeps_internal_marks() {
        assert_eq!(token_texts("twenty-three 1'234"), vec!["twenty-three", "1'234"]);
    }

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize("  pay  100 ");
        assert_eq!(tokens.len(), 2);
        assert_eq!(&"  pay  100 "[tokens[1].start..tokens[1].end], "100");
    }

    #[test]
    fn test_trailing_quantity_picks_longest_suffix() {
        let text = "he gave me twenty five";
        let tokens = tokenize(text);
        let (value, start) = trailing_quantity(text, &tokens).unwrap().unwrap();
        assert_eq!(value, 25.0);
        assert_eq!(&text[start..], "twenty five");
    }

    #[test]
    fn test_trailing_quantity_strips_fillers() {
        let text = "half a";
        let tokens = tokenize(text);
        let (value, start) = trailing_quantity(text, &tokens).unwrap().unwrap();
        assert_eq!(value, 0.5);
        assert_eq!(start, 0);
    }

    #[test]
    fn test_trailing_quantity_article_counts_as_one() {
        let text = "i owe a";
        let tokens = tokenize(text);
        let (value, _) = trailing_quantity(text, &tokens).unwrap().unwrap();
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_trailing_quantity_rejects_plain_words() {
        let text = "nothing numeric here";
        let tokens = tokenize(text);
        assert!(trailing_quantity(text, &tokens).unwrap().is_none());
    }

    #[test]
    fn test_quantity_of_hybrid() {
        assert_eq!(quantity_of("2 million").unwrap(), Some(2_000_000.0));
        assert_eq!(quantity_of("2.5 million").unwrap(), Some(2_500_000.0));
        assert_eq!(quantity_of("1,234 thousand").unwrap(), Some(1_234_000.0));
    }

    #[test]
    fn test_quantity_of_grouped_digits() {
        assert_eq!(quantity_of("1,234.56").unwrap(), Some(1234.56));
    }

    #[test]
    fn test_quantity_of_rejects_garbage() {
        assert_eq!(quantity_of("million monkeys").unwrap(), None);
        assert_eq!(quantity_of("").unwrap(), None);
    }
}
