pub mod types;
pub mod classification;

pub use types::PhishGuardError;
pub use classification::{ErrorClassification, FailureKind};
