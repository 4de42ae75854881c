pub(crate) mod amount;
pub(crate) mod currency;

use crate::config::MAX_TEXT_LENGTH;
use crate::currency::{registry, symbols};
use crate::error::{MoneyError, Result};
use crate::models::{ParseOptions, ParsedMoney};
use crate::negative;
use crate::utils::normalize_input;

/// A stage consumes the context and returns a derived one.
type Stage = fn(&str, ParsedMoney) -> Result<ParsedMoney>;

/// Detection stages in execution order. Currency context comes first
/// so the amount parsers can lean on it; new stages append here.
const STAGES: &[(&str, Stage)] = &[
    ("currency", currency::detect),
    ("amount", amount::detect),
];

/// Single-expression parse pipeline.
///
/// Validates the input, normalizes it, strips any negative marker,
/// then walks the detection stages over the cleaned expression. Stages
/// fill the `ParsedMoney` context in place; whatever is still missing
/// afterwards is left absent rather than guessed, unless the caller
/// supplied a default currency.
pub(crate) fn run(text: &str, options: &ParseOptions) -> Result<ParsedMoney> {
    // An unregistered default is a caller bug, reported before any
    // parsing work happens.
    let default_code = match &options.default_currency {
        Some(code) => match registry::get_by_code(code) {
            Some(info) => Some(info.code),
            None => return Err(MoneyError::InvalidCurrencyCode(code.clone())),
        },
        None => None,
    };

    if text.trim().is_empty() {
        return Err(MoneyError::EmptyText);
    }
    let length = text.chars().count();
    if length > MAX_TEXT_LENGTH {
        return Err(MoneyError::TextTooLong(length));
    }

    let normalized = normalize_input(text);
    let (expression, negative) = negative::strip(&normalized);
    if expression.is_empty() {
        return Err(MoneyError::EmptyText);
    }

    let mut ctx = ParsedMoney::new(text);
    ctx.negative = negative;

    for (name, stage) in STAGES {
        ctx = stage(&expression, ctx)?;
        tracing::debug!(
            "Stage '{}' done: currency={:?} amount={:?}",
            name,
            ctx.currency,
            ctx.amount
        );
    }

    apply_default(&mut ctx, default_code);

    Ok(ctx)
}

/// Fill in the caller's default currency, or let it settle a shared
/// symbol: "$" reads as CAD for a caller whose default is CAD, but a
/// detected unambiguous currency is never overridden.
fn apply_default(ctx: &mut ParsedMoney, default_code: Option<&'static str>) {
    let default_code = match default_code {
        Some(code) => code,
        None => return,
    };

    let current = match ctx.currency {
        Some(current) => current,
        None => {
            ctx.currency = Some(default_code);
            ctx.currency_was_default = true;
            return;
        }
    };

    if let Some(detail) = ctx.last_match_of("currency-symbol") {
        if let Some(entry) = symbols::lookup(&detail.text) {
            if entry.canonical == current && entry.is_ambiguous() && entry.is_shared_with(default_code)
            {
                ctx.currency = Some(default_code);
            }
        }
    }
}
