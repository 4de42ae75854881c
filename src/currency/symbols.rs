/// One symbol row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    /// The symbol text as it appears in normalized input
    pub symbol: &'static str,
    /// Code reported when nothing disambiguates the symbol
    pub canonical: &'static str,
    /// Every currency that commonly uses this symbol
    pub shared_by: &'static [&'static str],
}

impl SymbolEntry {
    /// True when more than one currency uses this symbol.
    pub fn is_ambiguous(&self) -> bool {
        self.shared_by.len() > 1
    }

    /// True when `code` is one of the currencies sharing this symbol.
    pub fn is_shared_with(&self, code: &str) -> bool {
        self.shared_by.iter().any(|c| c.eq_ignore_ascii_case(code))
    }
}

const fn sym(
    symbol: &'static str,
    canonical: &'static str,
    shared_by: &'static [&'static str],
) -> SymbolEntry {
    SymbolEntry {
        symbol,
        canonical,
        shared_by,
    }
}

/// Dollar-sign currencies that plain "$" can stand for.
const DOLLAR_FAMILY: &[&str] = &[
    "USD", "CAD", "AUD", "NZD", "HKD", "SGD", "MXN", "ARS", "CLP", "COP",
];

/// Rupee currencies that "Rs" / "₨" can stand for.
const RUPEE_FAMILY: &[&str] = &["INR", "PKR", "LKR", "NPR"];

/// Scandinavian currencies abbreviated "kr".
const KRONE_FAMILY: &[&str] = &["SEK", "NOK", "DKK", "ISK"];

/// Symbol rows in match order. Symbols are matched before codes and
/// names; a symbol that several currencies share ("$", "¥", "kr")
/// resolves to its canonical code unless a caller-supplied default
/// currency or an Indian-format amount disambiguates it later.
pub const SYMBOLS: &[SymbolEntry] = &[
    // Prefixed dollar signs must come before plain "$"
    sym("US$", "USD", &["USD"]),
    sym("HK$", "HKD", &["HKD"]),
    sym("NZ$", "NZD", &["NZD"]),
    sym("R$", "BRL", &["BRL"]),
    sym("S$", "SGD", &["SGD"]),
    sym("A$", "AUD", &["AUD"]),
    sym("C$", "CAD", &["CAD"]),
    sym("$", "USD", DOLLAR_FAMILY),
    sym("€", "EUR", &["EUR"]),
    sym("£", "GBP", &["GBP", "EGP"]),
    sym("¥", "JPY", &["JPY", "CNY"]),
    sym("₹", "INR", &["INR"]),
    sym("₨", "INR", RUPEE_FAMILY),
    sym("Rs", "INR", RUPEE_FAMILY),
    sym("₽", "RUB", &["RUB"]),
    sym("₩", "KRW", &["KRW"]),
    sym("₺", "TRY", &["TRY"]),
    sym("₴", "UAH", &["UAH"]),
    sym("₪", "ILS", &["ILS"]),
    sym("฿", "THB", &["THB"]),
    sym("₫", "VND", &["VND"]),
    sym("₱", "PHP", &["PHP"]),
    sym("₦", "NGN", &["NGN"]),
    sym("zł", "PLN", &["PLN"]),
    sym("kr", "SEK", KRONE_FAMILY),
    sym("Fr", "CHF", &["CHF"]),
];

/// Find the table entry for a matched symbol.
///
/// Letter symbols ("Rs", "kr") are folded case-insensitively because the
/// match pattern accepts any casing for them.
pub fn lookup(symbol: &str) -> Option<&'static SymbolEntry> {
    if let Some(entry) = SYMBOLS.iter().find(|e| e.symbol == symbol) {
        return Some(entry);
    }
    let folded = symbol.to_lowercase();
    SYMBOLS
        .iter()
        .filter(|e| is_letter_symbol(e.symbol))
        .find(|e| e.symbol.to_lowercase() == folded)
}

fn is_letter_symbol(symbol: &str) -> bool {
    symbol.chars().all(|c| c.is_alphabetic())
}

/// Regex fragment matching any known symbol, longest first.
///
/// Letter symbols get word boundaries and case folding; symbols that
/// merely start with letters ("US$") get a leading boundary so they do
/// not fire inside words.
pub(crate) fn symbol_pattern() -> String {
    let mut entries: Vec<&SymbolEntry> = SYMBOLS.iter().collect();
    entries.sort_by(|a, b| b.symbol.len().cmp(&a.symbol.len()));

    let alternatives: Vec<String> = entries
        .iter()
        .map(|entry| {
            let escaped = regex::escape(entry.symbol);
            if is_letter_symbol(entry.symbol) {
                format!(r"\b(?i:{})\b", escaped)
            } else if entry
                .symbol
                .chars()
                .next()
                .map(|c| c.is_alphabetic())
                .unwrap_or(false)
            {
                format!(r"\b{}", escaped)
            } else {
                escaped
            }
        })
        .collect();

    format!("(?:{})", alternatives.join("|"))
}
