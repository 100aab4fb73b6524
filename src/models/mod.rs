pub mod result;
pub mod submission;

pub use result::*;
pub use submission::*;
