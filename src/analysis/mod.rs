pub mod extract;
pub mod analyzer;

pub use extract::{extract, Extraction};
pub use analyzer::Analyzer;
