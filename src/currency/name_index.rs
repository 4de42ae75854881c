/// Currency name index.
///
/// Maps lowercased name words ("dollar", "euros", "sterling") to
/// currency codes. The index is derived from the registry once, on
/// first use, and shared read-only afterwards.
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::registry;

/// Words that appear inside multi-word currency names but identify
/// nothing by themselves. Indexing them would turn everyday text into
/// currency mentions.
const STOPWORDS: &[&str] = &["and", "the", "of", "new", "united", "states", "south"];

/// Name words shared by several currencies, pinned to the code a bare
/// mention most commonly means.
const OVERRIDES: &[(&str, &str)] = &[
    ("dollar", "USD"),
    ("dollars", "USD"),
    ("pound", "GBP"),
    ("pounds", "GBP"),
    ("peso", "MXN"),
    ("pesos", "MXN"),
    ("rupee", "INR"),
    ("rupees", "INR"),
    ("krona", "SEK"),
    ("kronor", "SEK"),
    ("krone", "NOK"),
    ("kroner", "NOK"),
    ("franc", "CHF"),
    ("francs", "CHF"),
    ("dinar", "KWD"),
    ("dinars", "KWD"),
    ("rial", "IRR"),
    ("rials", "IRR"),
    ("shilling", "KES"),
    ("shillings", "KES"),
];

lazy_static! {
    /// Lowercased name word → currency code.
    static ref NAME_INDEX: HashMap<String, &'static str> = build_index();
}

fn build_index() -> HashMap<String, &'static str> {
    let mut index: HashMap<String, &'static str> = HashMap::new();

    for info in registry::all() {
        for word in info.name.split([' ', '-']) {
            let word = word.to_lowercase();
            if word.len() < 3 || STOPWORDS.contains(&word.as_str()) {
                continue;
            }
            // First insertion wins; overrides below settle shared words.
            if let Some(plural) = plural_of(&word) {
                index.entry(plural).or_insert(info.code);
            }
            index.entry(word).or_insert(info.code);
        }
    }

    for (word, code) in OVERRIDES {
        index.insert((*word).to_string(), code);
    }

    tracing::debug!("Currency name index built: {} words", index.len());
    index
}

fn plural_of(word: &str) -> Option<String> {
    if word.ends_with('s') {
        None
    } else {
        Some(format!("{}s", word))
    }
}

/// Look up a single word against the index.
pub fn lookup(word: &str) -> Option<&'static str> {
    let word = word.trim().to_lowercase();
    NAME_INDEX.get(word.as_str()).copied()
}

/// Regex fragment matching any indexed name word, longest first so
/// plural forms win over their singular prefixes.
pub(crate) fn word_pattern() -> String {
    let mut words: Vec<&str> = NAME_INDEX.keys().map(|s| s.as_str()).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    format!("(?:{})", words.join("|"))
}

/// Force index construction, for callers that want startup cost paid
/// before the first parse.
pub(crate) fn warm() {
    lazy_static::initialize(&NAME_INDEX);
}
