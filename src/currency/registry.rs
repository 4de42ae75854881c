/// Static ISO 4217 registry.
///
/// Every currency the parser can report lives in this table. The name
/// index and the candidate pattern tables are both derived from it, so
/// adding a currency here is enough to make its name and code
/// detectable everywhere else.
use serde::Serialize;

/// One ISO 4217 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// Alphabetic code ("USD")
    pub code: &'static str,
    /// Numeric code (840)
    pub numeric: u16,
    /// English name ("United States dollar")
    pub name: &'static str,
    /// Number of digits after the decimal separator (0 for JPY, 3 for KWD)
    pub decimal_digits: u32,
}

impl CurrencyInfo {
    const fn new(
        code: &'static str,
        numeric: u16,
        name: &'static str,
        decimal_digits: u32,
    ) -> Self {
        CurrencyInfo {
            code,
            numeric,
            name,
            decimal_digits,
        }
    }

    /// 10^decimal_digits, the number of minor units in one major unit.
    pub fn minor_scale(&self) -> f64 {
        10u32.pow(self.decimal_digits) as f64
    }
}

pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo::new("AED", 784, "United Arab Emirates dirham", 2),
    CurrencyInfo::new("ARS", 32, "Argentine peso", 2),
    CurrencyInfo::new("AUD", 36, "Australian dollar", 2),
    CurrencyInfo::new("BHD", 48, "Bahraini dinar", 3),
    CurrencyInfo::new("BRL", 986, "Brazilian real", 2),
    CurrencyInfo::new("CAD", 124, "Canadian dollar", 2),
    CurrencyInfo::new("CHF", 756, "Swiss franc", 2),
    CurrencyInfo::new("CLP", 152, "Chilean peso", 0),
    CurrencyInfo::new("CNY", 156, "Chinese yuan", 2),
    CurrencyInfo::new("COP", 170, "Colombian peso", 2),
    CurrencyInfo::new("CZK", 203, "Czech koruna", 2),
    CurrencyInfo::new("DKK", 208, "Danish krone", 2),
    CurrencyInfo::new("EGP", 818, "Egyptian pound", 2),
    CurrencyInfo::new("EUR", 978, "Euro", 2),
    CurrencyInfo::new("GBP", 826, "Pound sterling", 2),
    CurrencyInfo::new("HKD", 344, "Hong Kong dollar", 2),
    CurrencyInfo::new("HUF", 348, "Hungarian forint", 2),
    CurrencyInfo::new("IDR", 360, "Indonesian rupiah", 2),
    CurrencyInfo::new("ILS", 376, "Israeli new shekel", 2),
    CurrencyInfo::new("INR", 356, "Indian rupee", 2),
    CurrencyInfo::new("IQD", 368, "Iraqi dinar", 3),
    CurrencyInfo::new("IRR", 364, "Iranian rial", 2),
    CurrencyInfo::new("ISK", 352, "Icelandic krona", 0),
    CurrencyInfo::new("JOD", 400, "Jordanian dinar", 3),
    CurrencyInfo::new("JPY", 392, "Japanese yen", 0),
    CurrencyInfo::new("KES", 404, "Kenyan shilling", 2),
    CurrencyInfo::new("KRW", 410, "South Korean won", 0),
    CurrencyInfo::new("KWD", 414, "Kuwaiti dinar", 3),
    CurrencyInfo::new("LKR", 144, "Sri Lankan rupee", 2),
    CurrencyInfo::new("MXN", 484, "Mexican peso", 2),
    CurrencyInfo::new("MYR", 458, "Malaysian ringgit", 2),
    CurrencyInfo::new("NGN", 566, "Nigerian naira", 2),
    CurrencyInfo::new("NOK", 578, "Norwegian krone", 2),
    CurrencyInfo::new("NPR", 524, "Nepalese rupee", 2),
    CurrencyInfo::new("NZD", 554, "New Zealand dollar", 2),
    CurrencyInfo::new("OMR", 512, "Omani rial", 3),
    CurrencyInfo::new("PHP", 608, "Philippine peso", 2),
    CurrencyInfo::new("PKR", 586, "Pakistani rupee", 2),
    CurrencyInfo::new("PLN", 985, "Polish zloty", 2),
    CurrencyInfo::new("RUB", 643, "Russian ruble", 2),
    CurrencyInfo::new("SAR", 682, "Saudi riyal", 2),
    CurrencyInfo::new("SEK", 752, "Swedish krona", 2),
    CurrencyInfo::new("SGD", 702, "Singapore dollar", 2),
    CurrencyInfo::new("THB", 764, "Thai baht", 2),
    CurrencyInfo::new("TND", 788, "Tunisian dinar", 3),
    CurrencyInfo::new("TRY", 949, "Turkish lira", 2),
    CurrencyInfo::new("UAH", 980, "Ukrainian hryvnia", 2),
    CurrencyInfo::new("USD", 840, "United States dollar", 2),
    CurrencyInfo::new("VND", 704, "Vietnamese dong", 0),
    CurrencyInfo::new("ZAR", 710, "South African rand", 2),
];

/// Look up a currency by alphabetic code, case-insensitively.
pub fn get_by_code(code: &str) -> Option<&'static CurrencyInfo> {
    let code = code.trim();
    if code.len() != 3 {
        return None;
    }
    CURRENCIES
        .iter()
        .find(|info| info.code.eq_ignore_ascii_case(code))
}

/// All registered currencies, sorted by alphabetic code.
pub fn all() -> &'static [CurrencyInfo] {
    CURRENCIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(get_by_code("usd").map(|c| c.code), Some("USD"));
        assert_eq!(get_by_code("Usd").map(|c| c.code), Some("USD"));
        assert_eq!(get_by_code(" EUR ").map(|c| c.code), Some("EUR"));
    }

    #[test]
    fn test_lookup_rejects_unknown_codes() {
        assert!(get_by_code("XYZ").is_none());
        assert!(get_by_code("US").is_none());
        assert!(get_by_code("USDA").is_none());
        assert!(get_by_code("").is_none());
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in CURRENCIES.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "{} must sort before {}",
                pair[0].code,
                pair[1].code
            );
        }
    }

    #[test]
    fn test_codes_are_uppercase_ascii() {
        for info in all() {
            assert_eq!(info.code.len(), 3);
            assert!(info.code.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_minor_scale() {
        assert_eq!(get_by_code("USD").map(|c| c.minor_scale()), Some(100.0));
        assert_eq!(get_by_code("JPY").map(|c| c.minor_scale()), Some(1.0));
        assert_eq!(get_by_code("KWD").map(|c| c.minor_scale()), Some(1000.0));
    }
}
