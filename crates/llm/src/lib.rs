//! HTTP gateways to the hosted completion and transcription backends.
//!
//! [`HttpGateway`] wraps a `reqwest::Client` with bearer authentication
//! and a base URL; [`CompletionGateway`] and [`TranscriptionGateway`]
//! build on it to implement the two backend traits the application is
//! written against. Tests substitute in-memory trait implementations.

pub use {
    completion::{CompletionBackend, CompletionGateway, SamplingParams},
    http::{DEFAULT_BASE_URL, HttpGateway},
    request::ChatRequest,
    response::{ChatResponse, Choice, ChoiceMessage, TranscriptionResponse},
    reqwest::Client,
    transcription::{TRANSCRIPTION_MODEL, TranscriptionBackend, TranscriptionGateway},
};

mod completion;
mod http;
mod request;
mod response;
mod transcription;
