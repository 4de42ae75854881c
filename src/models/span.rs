use serde::Serialize;

/// One money mention found by `parse_all`.
///
/// Offsets index the normalized form of the scanned text. Spans are
/// reported left to right and never overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneySpan {
    /// Byte offset where the mention starts
    pub start: usize,
    /// Byte offset one past the end of the mention
    pub end: usize,
    /// The matched fragment
    pub text: String,
    /// ISO 4217 code
    pub currency: &'static str,
    /// Amount in major units, always non-negative
    pub amount: f64,
    /// True when the mention marks the amount as negative
    pub negative: bool,
}
