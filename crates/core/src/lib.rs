//! Core types for the murmur conversational relay.
//!
//! This crate holds the pieces the rest of the workspace is built on:
//! chat `Message`/`Role` types and the bounded request window, the
//! persona and model catalogs, the per-user `SessionStore`, and the
//! `RelayError` taxonomy.

pub use {
    catalog::{
        DEFAULT_MODEL, DEFAULT_PERSONA_KEY, ModelCatalog, Persona, PersonaCatalog,
        format_model_info,
    },
    error::RelayError,
    message::{Message, Role, WINDOW_LEN, window},
    session::{Session, SessionHandle, SessionStore, UserId},
};

mod catalog;
mod error;
mod message;
mod session;
