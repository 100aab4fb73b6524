pub mod classify;

pub use classify::{compose_prompt, PromptVariables};
