pub mod provider;
pub mod chat_completions;
pub mod types;

pub use provider::CompletionProvider;
pub use chat_completions::ChatCompletionsProvider;
