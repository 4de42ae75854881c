/// Multi-occurrence extraction.
///
/// Coarse per-family candidate matchers sweep the whole input for
/// approximate windows, every window is re-parsed through the
/// single-expression pipeline, and surviving candidates are reduced to
/// a non-overlapping, ordered list. The candidate patterns over-match
/// on purpose; precision comes from the re-parse.
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::MAX_TEXT_LENGTH;
use crate::currency::{name_index, symbols};
use crate::error::{MoneyError, Result};
use crate::models::{MoneySpan, ParseOptions};
use crate::patterns::{digits, fractions, minor_units, number_words, slang};
use crate::pipeline;
use crate::utils::normalize_input;

lazy_static! {
    /// One coarse matcher per pattern family
    static ref CANDIDATE_FAMILIES: Vec<Regex> = build_families();

    /// "minus" / "negative" immediately left of a candidate window
    static ref NEGATIVE_WORD: Regex = Regex::new(r"(?i)\b(?:minus|negative)\s*$").unwrap();
}

fn build_families() -> Vec<Regex> {
    let num = digits::NUM_PATTERN;
    let sym = symbols::symbol_pattern();
    let names = name_index::word_pattern();
    let words = number_words::vocab_pattern();
    let fracs = fractions::vocab_pattern();
    let slang_words = slang::word_pattern();
    let minor_words = minor_units::word_pattern();

    // A run of quantity-ish tokens. The run may continue over
    // connectives ("a hundred and twenty three") and multi-word name
    // fillers ("five united states dollars") but never starts on one,
    // so "and 30 euros" windows from "30", not from "and".
    let starter = format!(r"(?:{num}|\b(?i:a|an|{words}|{fracs})\b)");
    let runword =
        format!(r"(?:{num}|\b(?i:a|an|of|and|the|united|states|new|south|{words}|{fracs})\b)");
    let quantity_run = format!(r"{starter}(?:[\s-]+{runword}){{0,11}}");

    // A small value as digits or one or two number words
    let small = format!(r"(?:{num}|\b(?i:{words})\b(?:[\s-]+\b(?i:{words})\b)?)");

    let families = [
        // currency symbol attached to a number
        format!(r"(?:{sym}\s*{num}|{num}\s*{sym})"),
        // ISO code attached to a number; validation happens on re-parse
        format!(r"(?:\b[A-Za-z]{{3}}\s*{num}|{num}\s*[A-Za-z]{{3}}\b)"),
        // shorthand magnitude suffixes, optionally marked with a symbol or code
        format!(r"(?:{sym}\s*)?\b\d+(?:\.\d+)?\s*(?i:bn|[kmb])\b(?:\s*[A-Za-z]{{3}}\b)?"),
        // slang terms with optional multiplier and cents tail
        format!(r"(?:{quantity_run}[\s-]+)?\b(?i:{slang_words})\b(?:[\s-]+{small})?"),
        // quantity + currency words, with optional explicit minor part
        format!(
            r"{quantity_run}[\s-]+\b(?i:{names}|[A-Za-z]{{3}})\b(?:[\s-]+\b(?i:{names})\b){{0,3}}(?:[\s,]+(?i:and[\s-]+)?{small}[\s-]+\b(?i:{minor_words})\b)?"
        ),
        // standalone minor units
        format!(r"{quantity_run}[\s-]+\b(?i:{minor_words})\b"),
    ];

    families
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
}

/// Force construction of the candidate regex set.
pub(crate) fn warm() {
    lazy_static::initialize(&CANDIDATE_FAMILIES);
    lazy_static::initialize(&NEGATIVE_WORD);
}

/// Find every money expression in `text`, ordered by position.
///
/// Candidates that resolve both a currency and an amount survive; the
/// rest are dropped silently. An overflow inside any candidate aborts
/// the whole call. Offsets index the normalized form of the input,
/// which is byte-identical to the input for plain ASCII text.
pub fn parse_all(text: &str) -> Result<Vec<MoneySpan>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let length = text.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(MoneyError::TextTooLong(length));
    }

    let normalized = normalize_input(text);
    let candidates = candidate_windows(&normalized);
    tracing::debug!("{} candidate windows in {} bytes", candidates.len(), normalized.len());

    let options = ParseOptions::default();
    let mut resolved: Vec<MoneySpan> = Vec::new();
    for (start, end) in candidates {
        let window = &normalized[start..end];
        let parsed = match pipeline::run(window, &options) {
            Ok(parsed) => parsed,
            // A window can trip a structural error the surrounding text
            // never meant ("and 100 cents" without its major part);
            // those windows are simply not money. Overflow is different:
            // the text really names an unsafe amount.
            Err(MoneyError::Overflow(offending)) => return Err(MoneyError::Overflow(offending)),
            Err(_) => continue,
        };
        let (currency, amount) = match (parsed.currency, parsed.amount) {
            (Some(currency), Some(amount)) => (currency, amount),
            _ => continue,
        };
        resolved.push(MoneySpan {
            start,
            end,
            text: window.to_string(),
            currency,
            amount,
            negative: parsed.negative,
        });
    }

    // Earliest first; at the same start the longest candidate wins the
    // overlap sweep below.
    resolved.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<MoneySpan> = Vec::new();
    for span in resolved {
        if kept.last().map_or(true, |prev| span.start >= prev.end) {
            kept.push(span);
        }
    }
    Ok(kept)
}

/// Run every family over the text and collect deduplicated, trimmed,
/// negative-widened windows.
fn candidate_windows(normalized: &str) -> Vec<(usize, usize)> {
    let mut windows = Vec::new();
    for family in CANDIDATE_FAMILIES.iter() {
        for m in family.find_iter(normalized) {
            let fragment = m.as_str();
            let lead = fragment.len() - fragment.trim_start().len();
            let start = m.start() + lead;
            let end = start + fragment.trim().len();
            if start < end {
                windows.push(widen_negative(normalized, start, end));
            }
        }
    }
    windows.sort();
    windows.dedup();
    windows
}

/// Pull a negative marker sitting immediately left of the window into
/// it, so the re-parse sees "-$50" instead of "$50". Markers glued to
/// other text ("$5-$10") stay out.
fn widen_negative(text: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = text.as_bytes();

    let mut left = start;
    while left > 0 && bytes[left - 1] == b' ' {
        left -= 1;
    }

    if left > 0 && bytes[left - 1] == b'(' {
        let open = left - 1;
        if open == 0 || bytes[open - 1].is_ascii_whitespace() {
            let mut close = end;
            while close < bytes.len() && bytes[close] == b' ' {
                close += 1;
            }
            if close < bytes.len() && bytes[close] == b')' {
                return (open, close + 1);
            }
        }
        return (start, end);
    }

    if left > 0 && bytes[left - 1] == b'-' {
        let dash = left - 1;
        if dash == 0 || bytes[dash - 1].is_ascii_whitespace() {
            return (dash, end);
        }
        return (start, end);
    }

    if let Some(m) = NEGATIVE_WORD.find(&text[..start]) {
        return (m.start(), end);
    }

    (start, end)
}
