/// Words that negate when they open the expression.
const NEGATIVE_WORDS: &[&str] = &["minus", "negative"];

/// Negative-amount pre-pass.
///
/// Accounting parentheses around the value or a leading negative
/// marker flag the result as negative and are stripped before pattern
/// matching runs. A marker that is not at the very start of the
/// trimmed input never counts, so hyphens inside identifiers or
/// ranges are left alone.
pub(crate) fn strip(text: &str) -> (String, bool) {
    let trimmed = text.trim();

    // "(500)" and "($29.99) fee" style accounting negatives. Text
    // after the closing parenthesis stays part of the expression.
    if let Some(inner) = trimmed.strip_prefix('(') {
        if let Some(close) = inner.find(')') {
            let stripped = format!("{}{}", &inner[..close], &inner[close + 1..]);
            return (stripped.trim().to_string(), true);
        }
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        return (rest.trim_start().to_string(), true);
    }

    for word in NEGATIVE_WORDS {
        if let Some(head) = trimmed.get(..word.len()) {
            if head.eq_ignore_ascii_case(word) {
                let rest = &trimmed[word.len()..];
                if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                    return (rest.trim_start().to_string(), true);
                }
            }
        }
    }

    (trimmed.to_string(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_hyphen() {
        assert_eq!(strip("-$100"), ("$100".to_string(), true));
        assert_eq!(strip("- 100"), ("100".to_string(), true));
    }

    #[test]
    fn test_accounting_parentheses() {
        assert_eq!(strip("(500)"), ("500".to_string(), true));
        assert_eq!(strip("($29.99)"), ("$29.99".to_string(), true));
    }

    #[test]
    fn test_parentheses_keep_trailing_text() {
        assert_eq!(strip("(500) dollars"), ("500 dollars".to_string(), true));
    }

    #[test]
    fn test_negative_words() {
        assert_eq!(strip("minus 100"), ("100".to_string(), true));
        assert_eq!(strip("Negative 50 euros"), ("50 euros".to_string(), true));
        assert_eq!(strip("MINUS $5"), ("$5".to_string(), true));
    }

    #[test]
    fn test_word_needs_whitespace_boundary() {
        assert_eq!(strip("minuscule 5"), ("minuscule 5".to_string(), false));
        assert_eq!(strip("negatives"), ("negatives".to_string(), false));
    }

    #[test]
    fn test_embedded_markers_do_not_count() {
        assert_eq!(strip("well-known $5"), ("well-known $5".to_string(), false));
        assert_eq!(strip("pay 5 - 3"), ("pay 5 - 3".to_string(), false));
    }

    #[test]
    fn test_unbalanced_parenthesis() {
        assert_eq!(strip("(500"), ("(500".to_string(), false));
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(strip("100"), ("100".to_string(), false));
        assert_eq!(strip("  $42  "), ("$42".to_string(), false));
    }
}
