/// Input normalization applied before any pattern matching.
///
/// Folds the Unicode lookalikes that show up in real-world money text
/// (typographic apostrophes in Swiss amounts, non-breaking spaces in
/// French amounts, minus-sign variants) into their ASCII forms so the
/// pattern tables only have to deal with one spelling of each.
use unicode_normalization::UnicodeNormalization;

/// Normalize text for parsing.
///
/// All span offsets reported by the parser refer to this normalized
/// form. For plain ASCII input it is byte-identical to the input.
pub fn normalize_input(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            // Curly single quotes and modifier apostrophes → ASCII apostrophe
            // (Swiss grouping: 1'234'567)
            '\u{2018}' | '\u{2019}' | '\u{02BC}' | '\u{02BB}' => normalized.push('\''),
            // Curly double quotes → ASCII double quote
            '\u{201C}' | '\u{201D}' | '\u{201E}' => normalized.push('"'),
            // En dash, em dash, hyphen variants and the Unicode minus sign
            // → ASCII hyphen (negative detection, hyphenated number words)
            '\u{2010}' | '\u{2011}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => {
                normalized.push('-')
            }
            // Non-breaking, narrow non-breaking and thin spaces → space
            // (French grouping: 1 234,56)
            '\u{00A0}' | '\u{202F}' | '\u{2009}' => normalized.push(' '),
            // Soft hyphen → remove
            '\u{00AD}' => continue,
            _ => normalized.push(ch),
        }
    }

    // Compose combining sequences (NFC form)
    normalized.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let text = "I paid $1,234.56 yesterday";
        assert_eq!(normalize_input(text), text);
    }

    #[test]
    fn test_swiss_apostrophe_variants() {
        assert_eq!(normalize_input("1\u{2019}234.56"), "1'234.56");
        assert_eq!(normalize_input("1\u{02BC}234"), "1'234");
    }

    #[test]
    fn test_french_spacing_variants() {
        assert_eq!(normalize_input("1\u{00A0}234,56"), "1 234,56");
        assert_eq!(normalize_input("1\u{202F}234,56"), "1 234,56");
    }

    #[test]
    fn test_minus_and_dash_variants() {
        assert_eq!(normalize_input("\u{2212}50"), "-50");
        assert_eq!(normalize_input("\u{2013}50"), "-50");
        assert_eq!(normalize_input("twenty\u{2011}three"), "twenty-three");
    }

    #[test]
    fn test_soft_hyphen_removed() {
        assert_eq!(normalize_input("dol\u{00AD}lars"), "dollars");
    }

    #[test]
    fn test_nfc_composition() {
        // 'e' + combining acute → 'é'
        assert_eq!(normalize_input("caf\u{0065}\u{0301}"), "caf\u{00E9}");
    }
}
