//! Natural-language money parser.
//!
//! Extracts a currency and an amount from free-form English text. Input can
//! be symbolic (`$100`, `1.234,56 €`), coded (`USD 45`), worded (`a dollar
//! and 23 cents`, `quarter million dollars`), shorthand (`$1.5k`) or slang
//! (`twenty bucks`).
//!
//! ```
//! use moneytext::parse;
//!
//! let money = parse("a dollar and 23 cents")?;
//! assert_eq!(money.currency, Some("USD"));
//! assert_eq!(money.amount, Some(1.23));
//! # Ok::<(), moneytext::MoneyError>(())
//! ```
//!
//! [`parse`] reads the whole input as one money expression. To pull every
//! money mention out of a longer text, use [`parse_all`]:
//!
//! ```
//! use moneytext::parse_all;
//!
//! let spans = parse_all("I have $100 and he has €50")?;
//! assert_eq!(spans.len(), 2);
//! assert_eq!(spans[0].currency, "USD");
//! assert_eq!(spans[1].currency, "EUR");
//! # Ok::<(), moneytext::MoneyError>(())
//! ```

pub mod config;
pub mod currency;
pub mod error;
mod extract; // Internal modules, not exported
mod models;
mod negative;
mod patterns;
mod pipeline;
pub mod utils;

pub use error::{MoneyError, Result};
pub use extract::parse_all;
pub use models::{MatchDetail, MoneySpan, ParseOptions, ParsedMoney};

/// Parses a single money expression with default options.
pub fn parse(text: &str) -> Result<ParsedMoney> {
    pipeline::run(text, &ParseOptions::default())
}

/// Parses a single money expression.
///
/// `options.default_currency` fills in the currency when the text names an
/// amount without one (`"100"`), and settles shared symbols (`"$100"` with a
/// default of `"CAD"` reads as Canadian dollars).
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<ParsedMoney> {
    pipeline::run(text, options)
}

/// Builds the lazily-initialized lookup tables and pattern sets up front.
///
/// Everything initializes on first use, so calling this is optional. It is
/// useful when the first parse sits on a latency-sensitive path.
pub fn warm_up() {
    currency::name_index::warm();
    extract::warm();
}
