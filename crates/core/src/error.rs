//! Error taxonomy for per-request failures.
//!
//! Startup failures (missing credentials, unparseable config) are
//! `anyhow` errors at the application boundary and terminate the
//! process; everything here is recoverable per event and never crashes
//! the dispatch loop.

use thiserror::Error;

/// A recoverable per-request failure.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A model identifier outside the catalog reached the store.
    #[error("unknown model: {0}")]
    InvalidModel(String),

    /// A persona key outside the catalog reached the store.
    #[error("unknown persona: {0}")]
    InvalidPersona(String),

    /// Transport error or non-2xx from the completion backend.
    #[error("completion backend unavailable: {0}")]
    CompletionUnavailable(String),

    /// Transport error or non-2xx from the transcription backend.
    #[error("transcription backend unavailable: {0}")]
    TranscriptionUnavailable(String),
}
