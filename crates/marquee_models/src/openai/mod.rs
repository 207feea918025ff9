//! OpenAI-compatible chat completions client.

mod client;
mod dto;

pub use client::{OPENAI_API_KEY_VAR, OpenAiClient};
