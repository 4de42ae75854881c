pub mod name_index;
pub mod registry;
pub mod symbols;

pub use registry::{get_by_code, CurrencyInfo};
pub use symbols::SymbolEntry;
