//! Telegram front end for the murmur conversational relay.
//!
//! Wires the session store and the two gateways to teloxide: slash
//! commands, free text, voice messages, and inline-keyboard callbacks
//! are decoded by the router and handled by the orchestrator in
//! [`chat`].

pub use config::BotConfig;

pub mod chat;
pub mod config;
pub mod handler;
pub mod keyboard;
pub mod router;
pub mod text;
