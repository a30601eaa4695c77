mod client;

pub use client::{
    CompletionModel, CompletionSettings, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS, OpenAiClient,
};
