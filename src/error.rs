use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MoneyError {
    // Input validation errors
    EmptyText,
    TextTooLong(usize),
    InvalidCurrencyCode(String),

    // Structural errors raised after a pattern has matched
    UnknownMinorUnit(String),
    MinorUnitTooLarge(String),
    MinorUnitNotSupported(String),

    // Magnitude errors
    Overflow(String),
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::EmptyText => write!(f, "Text cannot be empty"),
            MoneyError::TextTooLong(len) => {
                write!(f, "Text too long: {} characters", len)
            }
            MoneyError::InvalidCurrencyCode(code) => {
                write!(f, "Invalid currency code: {}", code)
            }
            MoneyError::UnknownMinorUnit(word) => {
                write!(f, "Unknown minor unit: {}", word)
            }
            MoneyError::MinorUnitTooLarge(text) => {
                write!(f, "Minor unit out of range: {}", text)
            }
            MoneyError::MinorUnitNotSupported(text) => {
                write!(f, "Currency has no minor unit: {}", text)
            }
            MoneyError::Overflow(text) => {
                write!(f, "Amount exceeds the safe integer range: {}", text)
            }
        }
    }
}

impl std::error::Error for MoneyError {}

pub type Result<T> = std::result::Result<T, MoneyError>;
