pub mod parser;
pub mod types;
pub mod credentials;

pub use types::*;
pub use parser::{load_config, parse_config, require_api_key};
