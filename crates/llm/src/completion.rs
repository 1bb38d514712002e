//! Completion gateway.

use crate::{ChatRequest, ChatResponse, HttpGateway};
use murmur_core::{Message, RelayError};

/// Fixed sampling parameters for a completion call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl SamplingParams {
    /// Conversational replies: long answers, moderate randomness.
    pub const CHAT: Self = Self {
        temperature: 0.7,
        max_tokens: 1024,
    };

    /// Suggestion generation: short output, higher randomness for
    /// variety.
    pub const SUGGESTION: Self = Self {
        temperature: 0.8,
        max_tokens: 250,
    };
}

/// A chat-completion backend.
///
/// The seam between the orchestrator and the hosted API; tests provide
/// in-memory implementations.
pub trait CompletionBackend: Send + Sync {
    /// Send a message window and return the generated text.
    fn complete(
        &self,
        messages: &[Message],
        model: &str,
        params: SamplingParams,
    ) -> impl Future<Output = Result<String, RelayError>> + Send;
}

/// Completion backend over the hosted chat-completions API.
#[derive(Clone)]
pub struct CompletionGateway {
    http: HttpGateway,
}

impl CompletionGateway {
    /// Create a gateway over the given transport.
    pub fn new(http: HttpGateway) -> Self {
        Self { http }
    }
}

impl CompletionBackend for CompletionGateway {
    async fn complete(
        &self,
        messages: &[Message],
        model: &str,
        params: SamplingParams,
    ) -> Result<String, RelayError> {
        let body = ChatRequest::new(messages, model, params);
        let response: ChatResponse = self
            .http
            .post_json("/chat/completions", &body)
            .await
            .map_err(|e| RelayError::CompletionUnavailable(e.to_string()))?;

        response
            .content()
            .map(ToOwned::to_owned)
            .ok_or_else(|| RelayError::CompletionUnavailable("empty choices".to_owned()))
    }
}
