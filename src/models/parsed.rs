use serde::Serialize;

/// One detector hit recorded while assembling a parse result.
///
/// The offsets index the normalized form of the input (see
/// `utils::normalize_input`), which is byte-identical to the input for
/// plain ASCII text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetail {
    /// Detector that fired ("currency-symbol", "slang", "digits", ...)
    pub detector: &'static str,
    /// Matched fragment of the normalized input
    pub text: String,
    /// Byte offset where the fragment starts
    pub start: usize,
    /// Byte offset one past the end of the fragment
    pub end: usize,
}

/// Result of parsing one piece of text as a single money expression.
///
/// `currency` and `amount` are filled independently. Text like "100"
/// yields an amount with no currency; "euros" yields a currency with no
/// amount. Callers that need both should check `is_complete`.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedMoney {
    /// The input text, exactly as passed in
    pub original: String,
    /// ISO 4217 code, if one was detected or defaulted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<&'static str>,
    /// Detected amount in major units, always non-negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// True when `currency` came from the caller's default rather than
    /// from evidence in the text
    pub currency_was_default: bool,
    /// True when the text marks the amount as negative
    pub negative: bool,
    /// Every detector hit, in the order the pipeline recorded them
    pub matches: Vec<MatchDetail>,
}

impl ParsedMoney {
    pub(crate) fn new(original: &str) -> Self {
        ParsedMoney {
            original: original.to_string(),
            currency: None,
            amount: None,
            currency_was_default: false,
            negative: false,
            matches: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, detector: &'static str, text: &str, start: usize, end: usize) {
        self.matches.push(MatchDetail {
            detector,
            text: text.to_string(),
            start,
            end,
        });
    }

    /// True when both a currency and an amount were found.
    pub fn is_complete(&self) -> bool {
        self.currency.is_some() && self.amount.is_some()
    }

    /// Last recorded hit from the given detector, if any.
    pub(crate) fn last_match_of(&self, detector: &str) -> Option<&MatchDetail> {
        self.matches.iter().rev().find(|m| m.detector == detector)
    }
}
