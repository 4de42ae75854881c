pub mod options;
pub mod parsed;
pub mod span;

pub use options::ParseOptions;
pub use parsed::{MatchDetail, ParsedMoney};
pub use span::MoneySpan;
