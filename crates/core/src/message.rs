//! Chat messages and the bounded request window.

use serde::{Deserialize, Serialize};

/// Maximum number of history entries sent to the completion backend.
pub const WINDOW_LEN: usize = 6;

/// The role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Behavioral instruction for the assistant.
    System,
    /// End-user input.
    #[default]
    User,
    /// Model output.
    Assistant,
}

/// A single entry in a dialogue transcript.
///
/// Order within a history is chronological and significant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Message {
    /// The role of the message.
    pub role: Role,
    /// The text content of the message.
    pub content: String,
}

impl Message {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The sliding window of a transcript sent downstream.
///
/// Returns the most recent [`WINDOW_LEN`] entries in append order, or the
/// whole history when it is shorter. The full transcript stays in the
/// session; only this slice goes to the completion backend.
pub fn window(history: &[Message]) -> &[Message] {
    let start = history.len().saturating_sub(WINDOW_LEN);
    &history[start..]
}
