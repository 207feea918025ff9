//! Request and response types for language model completion.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// A completion request: an instruction framing plus the prompt body.
///
/// # Examples
///
/// ```
/// use marquee_core::CompletionRequest;
///
/// let request = CompletionRequest::from_prompt("You are a film archivist.", "Hello")
///     .with_temperature(0.2)
///     .with_max_tokens(32);
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.max_tokens, Some(32));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompletionRequest {
    /// The prompt messages, in order
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Build the common two-message request: a system instruction and a user prompt.
    ///
    /// ```
    /// use marquee_core::{CompletionRequest, Role};
    ///
    /// let request = CompletionRequest::from_prompt("You are a film archivist.", "inceptio");
    /// assert_eq!(request.messages[0].role, Role::System);
    /// assert_eq!(request.messages[1].content, "inceptio");
    /// ```
    pub fn from_prompt(instruction: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            messages: vec![
                Message::new(Role::System, instruction),
                Message::new(Role::User, body),
            ],
            ..Default::default()
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the length of the generated text.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Concatenated text of every user message.
    pub fn user_text(&self) -> String {
        self.messages
            .iter()
            .filter(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Free-form text returned by a language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text, untrimmed
    pub text: String,
}

impl CompletionResponse {
    /// Wrap generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
