use serde::Deserialize;

/// Caller-supplied parse options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// ISO 4217 code assumed when the text itself names no currency.
    ///
    /// Also disambiguates shared symbols: with a default of "CAD",
    /// "$100" parses as CAD instead of the canonical USD. Validated
    /// against the registry before parsing starts.
    pub default_currency: Option<String>,
}

impl ParseOptions {
    /// Options with the given default currency.
    pub fn with_default_currency(code: impl Into<String>) -> Self {
        ParseOptions {
            default_currency: Some(code.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_currency() {
        let options = ParseOptions::default();
        assert!(options.default_currency.is_none());
    }

    #[test]
    fn test_with_default_currency() {
        let options = ParseOptions::with_default_currency("EUR");
        assert_eq!(options.default_currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let options: ParseOptions = serde_json::from_str("{}").unwrap();
        assert!(options.default_currency.is_none());
    }

    #[test]
    fn test_deserialize_with_currency() {
        let options: ParseOptions =
            serde_json::from_str(r#"{"default_currency":"GBP"}"#).unwrap();
        assert_eq!(options.default_currency.as_deref(), Some("GBP"));
    }
}
