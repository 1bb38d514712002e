//! Chat-completions request body.

use crate::completion::SamplingParams;
use murmur_core::Message;
use serde::Serialize;

/// OpenAI-compatible chat completions request.
///
/// `stream` and `stop` are always present (`false` / `null`) to match
/// the backend contract exactly.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The bounded message window, oldest first.
    pub messages: Vec<Message>,
    /// The model identifier, used verbatim.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Top-p sampling, fixed at 1.
    pub top_p: u32,
    /// Streaming is never requested.
    pub stream: bool,
    /// Stop sequences, always `null`.
    pub stop: Option<Vec<String>>,
}

impl ChatRequest {
    /// Build a request from a message window, model, and sampling
    /// preset.
    pub fn new(messages: &[Message], model: &str, params: SamplingParams) -> Self {
        Self {
            messages: messages.to_vec(),
            model: model.to_owned(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            top_p: 1,
            stream: false,
            stop: None,
        }
    }
}
