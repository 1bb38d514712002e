//! Bot configuration loaded from TOML.

use anyhow::{Context, Result};
use compact_str::CompactString;
use murmur_core::{ModelCatalog, Persona, PersonaCatalog};
use std::{collections::BTreeMap, path::Path};

/// Top-level bot configuration.
#[derive(Debug, Default, serde::Deserialize)]
pub struct BotConfig {
    /// Telegram transport configuration.
    pub telegram: TelegramConfig,
    /// Completion/transcription backend configuration.
    pub llm: LlmConfig,
    /// Persona catalog, key -> persona. Empty degrades to the built-in
    /// default persona.
    #[serde(default)]
    pub personas: BTreeMap<CompactString, Persona>,
}

/// Telegram transport configuration.
#[derive(Debug, Default, serde::Deserialize)]
pub struct TelegramConfig {
    /// Bot authentication token (supports `${ENV_VAR}` expansion).
    pub bot_token: String,
}

/// Backend configuration.
#[derive(Debug, Default, serde::Deserialize)]
pub struct LlmConfig {
    /// API key for the completion/transcription backend (supports
    /// `${ENV_VAR}` expansion).
    pub api_key: String,
    /// Optional base URL override for the backend endpoint.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model identifiers offered to users. Empty means the built-in
    /// catalog.
    #[serde(default)]
    pub models: Vec<CompactString>,
}

impl BotConfig {
    /// Parse a TOML string, expanding environment variables in
    /// supported fields.
    ///
    /// Missing credentials are fatal; a missing persona table is not.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded).context("invalid configuration")?;
        anyhow::ensure!(
            !config.telegram.bot_token.is_empty(),
            "telegram bot token missing from configuration"
        );
        anyhow::ensure!(
            !config.llm.api_key.is_empty(),
            "backend api key missing from configuration"
        );
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Build the model catalog from configuration.
    pub fn model_catalog(&self) -> ModelCatalog {
        ModelCatalog::new(self.llm.models.clone())
    }

    /// Build the persona catalog from configuration.
    pub fn persona_catalog(&self) -> PersonaCatalog {
        PersonaCatalog::new(self.personas.clone())
    }
}

/// Expand `${VAR}` patterns in a string with environment variable
/// values.
///
/// Unknown variables are replaced with an empty string.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'{') {
            chars.next(); // consume '{'
            let mut var_name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                var_name.push(c);
            }
            if let Ok(val) = std::env::var(&var_name) {
                result.push_str(&val);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
