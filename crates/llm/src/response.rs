//! Backend response bodies.

use serde::Deserialize;

/// A chat completion response.
///
/// Only the fields the relay reads are modeled; everything else in the
/// backend payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// The completion choices.
    pub choices: Vec<Choice>,
}

impl ChatResponse {
    /// The first choice's message content.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// Message content of a completion choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    /// The content of the message.
    #[serde(default)]
    pub content: Option<String>,
}

/// A transcription response.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResponse {
    /// The verbose transcript text.
    pub text: String,
}
