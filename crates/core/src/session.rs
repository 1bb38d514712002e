//! Per-user session state.
//!
//! The store owns one [`Session`] per user identity, created lazily on
//! first contact and reclaimed when the process ends. The outer map
//! lock is held only long enough to fetch or insert the per-user entry;
//! the per-user async mutex serializes a whole turn (including gateway
//! awaits) for one identity so history is never mutated out of arrival
//! order, while different identities never contend.

use crate::{
    DEFAULT_MODEL, DEFAULT_PERSONA_KEY, Message, ModelCatalog, PersonaCatalog, RelayError,
};
use compact_str::CompactString;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

/// Opaque chat identity a session is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserId(pub i64);

/// Mutable per-user state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Full dialogue transcript, append-only except for reset.
    ///
    /// Grows without bound by design: `context_count` reads the whole
    /// transcript while requests only ever send the bounded window.
    pub history: Vec<Message>,
    /// Selected model identifier, always a valid catalog entry.
    pub model: CompactString,
    /// Selected persona key, always a valid catalog key at selection
    /// time.
    pub persona: CompactString,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            model: CompactString::const_new(DEFAULT_MODEL),
            persona: CompactString::const_new(DEFAULT_PERSONA_KEY),
        }
    }
}

/// Shared handle to one user's serialized session.
pub type SessionHandle = Arc<tokio::sync::Mutex<Session>>;

/// Thread-safe store of per-user sessions plus the catalogs their
/// model/persona fields are validated against.
pub struct SessionStore {
    models: ModelCatalog,
    personas: PersonaCatalog,
    sessions: Mutex<BTreeMap<UserId, SessionHandle>>,
}

impl SessionStore {
    /// Create an empty store over the given catalogs.
    pub fn new(models: ModelCatalog, personas: PersonaCatalog) -> Self {
        Self {
            models,
            personas,
            sessions: Mutex::new(BTreeMap::new()),
        }
    }

    /// Get or create the session handle for an identity.
    ///
    /// Never fails; first access creates a session with catalog
    /// defaults. Callers lock the returned handle for the duration of
    /// the turn they are processing.
    pub fn entry(&self, user: UserId) -> SessionHandle {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.entry(user).or_default().clone()
    }

    /// Clear an identity's history, leaving model and persona as they
    /// are.
    pub async fn reset(&self, user: UserId) {
        let handle = self.entry(user);
        let mut session = handle.lock().await;
        session.history.clear();
    }

    /// Select a model for an identity.
    ///
    /// Rejects identifiers outside the catalog without touching the
    /// session.
    pub async fn set_model(&self, user: UserId, model: &str) -> Result<(), RelayError> {
        if !self.models.contains(model) {
            return Err(RelayError::InvalidModel(model.to_owned()));
        }
        let handle = self.entry(user);
        let mut session = handle.lock().await;
        session.model = model.into();
        Ok(())
    }

    /// Select a persona for an identity.
    ///
    /// Rejects keys outside the catalog without touching the session.
    pub async fn set_persona(&self, user: UserId, persona: &str) -> Result<(), RelayError> {
        if !self.personas.contains(persona) {
            return Err(RelayError::InvalidPersona(persona.to_owned()));
        }
        let handle = self.entry(user);
        let mut session = handle.lock().await;
        session.persona = persona.into();
        Ok(())
    }

    /// Append a message to an identity's transcript.
    pub async fn append(&self, user: UserId, message: Message) {
        let handle = self.entry(user);
        let mut session = handle.lock().await;
        session.history.push(message);
    }

    /// Number of messages currently in an identity's transcript.
    ///
    /// Unseen identities report 0 without creating a session.
    pub async fn context_count(&self, user: UserId) -> usize {
        let handle = {
            let sessions = self.sessions.lock().unwrap();
            sessions.get(&user).cloned()
        };
        match handle {
            Some(handle) => handle.lock().await.history.len(),
            None => 0,
        }
    }

    /// The model catalog sessions are validated against.
    pub fn models(&self) -> &ModelCatalog {
        &self.models
    }

    /// The persona catalog sessions are validated against.
    pub fn personas(&self) -> &PersonaCatalog {
        &self.personas
    }
}
