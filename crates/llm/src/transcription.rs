//! Transcription gateway.

use crate::{HttpGateway, TranscriptionResponse};
use murmur_core::RelayError;
use reqwest::multipart::{Form, Part};

/// Fixed model identifier for audio transcription.
pub const TRANSCRIPTION_MODEL: &str = "whisper-large-v3";

/// An audio-transcription backend.
pub trait TranscriptionBackend: Send + Sync {
    /// Transcribe a raw audio payload to text.
    fn transcribe(&self, audio: Vec<u8>)
    -> impl Future<Output = Result<String, RelayError>> + Send;
}

/// Transcription backend over the hosted audio API.
#[derive(Clone)]
pub struct TranscriptionGateway {
    http: HttpGateway,
}

impl TranscriptionGateway {
    /// Create a gateway over the given transport.
    pub fn new(http: HttpGateway) -> Self {
        Self { http }
    }
}

impl TranscriptionBackend for TranscriptionGateway {
    async fn transcribe(&self, audio: Vec<u8>) -> Result<String, RelayError> {
        let form = Form::new()
            .part("file", Part::bytes(audio).file_name("voice_message.ogg"))
            .text("model", TRANSCRIPTION_MODEL)
            .text("response_format", "verbose_json");

        let response: TranscriptionResponse = self
            .http
            .post_multipart("/audio/transcriptions", form)
            .await
            .map_err(|e| RelayError::TranscriptionUnavailable(e.to_string()))?;

        Ok(response.text)
    }
}
