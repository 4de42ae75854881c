pub mod normalize;

pub use normalize::normalize_input;
