pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod ui;
pub mod utils;
