pub mod constants;

pub use constants::{MAX_SAFE_AMOUNT, MAX_TEXT_LENGTH};
