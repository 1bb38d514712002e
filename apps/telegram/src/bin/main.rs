//! Murmur bot entry point.
//!
//! Loads TOML configuration, builds the catalogs, session store, and
//! gateways, and runs the teloxide dispatcher until ctrl-c.

use anyhow::Result;
use murmur_core::SessionStore;
use murmur_llm::{Client, CompletionGateway, DEFAULT_BASE_URL, HttpGateway, TranscriptionGateway};
use murmur_telegram::{
    BotConfig,
    handler::{self, App},
};
use std::sync::Arc;
use teloxide::{
    Bot, dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, types::Update,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing from RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration; missing credentials are startup-fatal.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "murmur.toml".to_string());
    let config = BotConfig::load(&config_path)?;
    tracing::info!("loaded configuration from {config_path}");

    // Catalogs and per-user state.
    let store = SessionStore::new(config.model_catalog(), config.persona_catalog());

    // One HTTP client shared by both gateways.
    let base_url = config.llm.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
    let http = HttpGateway::bearer(Client::new(), &config.llm.api_key, base_url)?;
    let app = Arc::new(App {
        store,
        completion: CompletionGateway::new(http.clone()),
        transcription: TranscriptionGateway::new(http),
    });

    let bot = Bot::new(config.telegram.bot_token.clone());
    tracing::info!("bot starting");

    Dispatcher::builder(bot, handler::schema())
        .dependencies(dptree::deps![app])
        .default_handler(|update: Arc<Update>| async move {
            tracing::warn!("unhandled update: {update:?}");
        })
        .error_handler(LoggingErrorHandler::with_custom_text("dispatch error"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("bot stopped");
    Ok(())
}
