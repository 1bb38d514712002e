//! Configuration tests.

use murmur_core::DEFAULT_MODEL;
use murmur_telegram::{BotConfig, config::expand_env_vars};

#[test]
fn parse_minimal_config() {
    let toml = r#"
[telegram]
bot_token = "123:abc"

[llm]
api_key = "gsk-test"
"#;
    let config = BotConfig::from_toml(toml).unwrap();
    assert_eq!(config.telegram.bot_token, "123:abc");
    assert_eq!(config.llm.api_key, "gsk-test");
    assert!(config.llm.base_url.is_none());
    assert!(config.personas.is_empty());

    // Omitted model list falls back to the built-in catalog.
    assert!(config.model_catalog().contains(DEFAULT_MODEL));
    // Empty persona table degrades to the built-in default persona.
    assert!(config.persona_catalog().contains("default"));
}

#[test]
fn parse_full_config() {
    let toml = r#"
[telegram]
bot_token = "123:abc"

[llm]
api_key = "gsk-test"
base_url = "http://localhost:8080/v1"
models = ["llama-3.1-8b-instant", "gemma2-9b-it"]

[personas.default]
name = "Helper"
description = "a helpful assistant"

[personas.sherlock]
name = "Sherlock Holmes"
description = "a brilliant consulting detective"
"#;
    let config = BotConfig::from_toml(toml).unwrap();
    assert_eq!(config.llm.base_url.as_deref(), Some("http://localhost:8080/v1"));
    assert_eq!(config.llm.models.len(), 2);
    assert_eq!(config.personas.len(), 2);

    let personas = config.persona_catalog();
    assert_eq!(personas.get("sherlock").unwrap().name.as_str(), "Sherlock Holmes");

    let models = config.model_catalog();
    assert!(models.contains("gemma2-9b-it"));
    assert!(!models.contains("mixtral-8x7b-32768"));
}

#[test]
fn missing_bot_token_is_fatal() {
    let toml = r#"
[telegram]
bot_token = ""

[llm]
api_key = "gsk-test"
"#;
    let err = BotConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("bot token"));
}

#[test]
fn missing_api_key_is_fatal() {
    let toml = r#"
[telegram]
bot_token = "123:abc"

[llm]
api_key = ""
"#;
    let err = BotConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("api key"));
}

#[test]
fn invalid_toml_is_fatal() {
    assert!(BotConfig::from_toml("not toml [").is_err());
}

#[test]
fn credentials_expand_from_environment() {
    unsafe {
        std::env::set_var("MURMUR_TEST_TOKEN", "999:zzz");
        std::env::set_var("MURMUR_TEST_KEY", "gsk-env");
    }
    let toml = r#"
[telegram]
bot_token = "${MURMUR_TEST_TOKEN}"

[llm]
api_key = "${MURMUR_TEST_KEY}"
"#;
    let config = BotConfig::from_toml(toml).unwrap();
    assert_eq!(config.telegram.bot_token, "999:zzz");
    assert_eq!(config.llm.api_key, "gsk-env");
}

#[test]
fn unknown_env_var_expands_to_empty() {
    assert_eq!(
        expand_env_vars("key = \"${MURMUR_TEST_DOES_NOT_EXIST}\""),
        "key = \"\""
    );
    assert_eq!(expand_env_vars("plain text $notavar"), "plain text $notavar");
}

#[test]
fn load_reads_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("murmur.toml");
    std::fs::write(
        &path,
        "[telegram]\nbot_token = \"123:abc\"\n\n[llm]\napi_key = \"gsk-test\"\n",
    )
    .unwrap();

    let config = BotConfig::load(&path).unwrap();
    assert_eq!(config.telegram.bot_token, "123:abc");

    assert!(BotConfig::load(dir.path().join("missing.toml")).is_err());
}
