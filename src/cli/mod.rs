pub mod commands;
pub mod serve;
pub mod ui;
pub mod check;

pub use commands::{Cli, Commands};
