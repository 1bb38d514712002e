//! Shared HTTP transport for the OpenAI-compatible backend.

use anyhow::Result;
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
    multipart::Form,
};
use serde::{Serialize, de::DeserializeOwned};

/// Default backend base URL (Groq's OpenAI-compatible endpoint).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Bearer-authenticated HTTP transport shared by both gateways.
///
/// Holds a `reqwest::Client`, the pre-built authorization header, and
/// the backend base URL.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    headers: HeaderMap,
    base_url: String,
}

impl HttpGateway {
    /// Create a transport with bearer token authentication.
    pub fn bearer(client: Client, key: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, format!("Bearer {key}").parse()?);
        Ok(Self {
            client,
            headers,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// POST a JSON body and deserialize the JSON response.
    ///
    /// Non-2xx statuses are errors; the response body is not inspected
    /// for them.
    pub async fn post_json<R>(&self, path: &str, body: &impl Serialize) -> Result<R>
    where
        R: DeserializeOwned,
    {
        tracing::trace!("request {path}: {}", serde_json::to_string(body)?);
        let response = self
            .client
            .post(self.url(path))
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{path} returned {status}");
        }
        response.json::<R>().await.map_err(Into::into)
    }

    /// POST a multipart form and deserialize the JSON response.
    ///
    /// The form sets its own content type; only the auth headers are
    /// reused.
    pub async fn post_multipart<R>(&self, path: &str, form: Form) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .headers(self.headers.clone())
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("{path} returned {status}");
        }
        response.json::<R>().await.map_err(Into::into)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The pre-built headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
