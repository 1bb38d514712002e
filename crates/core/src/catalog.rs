//! Persona and model catalogs.
//!
//! Both catalogs are immutable lookup tables built once at startup.
//! Sessions hold keys into them; the store validates keys against them
//! before accepting a change.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog key of the built-in persona.
pub const DEFAULT_PERSONA_KEY: &str = "default";

/// Baseline model used by sessions that never picked one.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Model identifiers offered when configuration does not override them.
const DEFAULT_MODELS: &[&str] = &[
    "llama-3.1-405b-reasoning",
    "llama-3.1-70b-versatile",
    "llama-3.1-8b-instant",
    "llama3-groq-70b-8192-tool-use-preview",
    "llama3-groq-8b-8192-tool-use-preview",
    "llama3-70b-8192",
    "llama3-8b-8192",
    "mixtral-8x7b-32768",
    "gemma-7b-it",
    "gemma2-9b-it",
];

/// A named behavioral profile injected as a system-role instruction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Persona {
    /// Display name, also appended to every reply footer.
    pub name: CompactString,
    /// Free-text description of the persona's behavior.
    pub description: String,
}

impl Persona {
    /// The built-in fallback persona.
    pub fn fallback() -> Self {
        Self {
            name: "Default Character".into(),
            description: "A generic AI assistant.".into(),
        }
    }

    /// Synthesize the system-role instruction framing this persona.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}, {}. Respond accordingly.",
            self.name, self.description
        )
    }
}

/// Immutable persona lookup table, key -> [`Persona`].
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: BTreeMap<CompactString, Persona>,
}

impl PersonaCatalog {
    /// Build a catalog from configured personas.
    ///
    /// An empty table degrades to the built-in fallback under the
    /// default key so sessions always resolve.
    pub fn new(personas: BTreeMap<CompactString, Persona>) -> Self {
        if personas.is_empty() {
            tracing::warn!("no personas configured, using built-in default");
            return Self::default();
        }
        Self { personas }
    }

    /// Look up a persona by key.
    pub fn get(&self, key: &str) -> Option<&Persona> {
        self.personas.get(key)
    }

    /// Whether the key names a catalog entry.
    pub fn contains(&self, key: &str) -> bool {
        self.personas.contains_key(key)
    }

    /// Resolve a session's persona key for prompting and display.
    ///
    /// A stale key (removed from the catalog after a session selected
    /// it) falls back to the default entry, then to the built-in
    /// persona, rather than failing the turn.
    pub fn resolve(&self, key: &str) -> Persona {
        self.personas
            .get(key)
            .or_else(|| self.personas.get(DEFAULT_PERSONA_KEY))
            .cloned()
            .unwrap_or_else(Persona::fallback)
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, &Persona)> {
        self.personas.iter()
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        let mut personas = BTreeMap::new();
        personas.insert(CompactString::const_new(DEFAULT_PERSONA_KEY), Persona::fallback());
        Self { personas }
    }
}

/// Immutable list of model identifiers offered to users.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: Vec<CompactString>,
}

impl ModelCatalog {
    /// Build a catalog from configured identifiers, empty meaning the
    /// built-in Groq list.
    pub fn new(models: Vec<CompactString>) -> Self {
        if models.is_empty() {
            return Self::default();
        }
        Self { models }
    }

    /// Whether the identifier names a catalog entry.
    pub fn contains(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    /// Iterate identifiers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CompactString> {
        self.models.iter()
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().copied().map(CompactString::const_new).collect(),
        }
    }
}

/// Emoji-prefixed display line for a model identifier.
///
/// The emoji is keyed on the identifier's family prefix (text before
/// the first `-`).
pub fn format_model_info(model: &str) -> String {
    let prefix = model.split('-').next().unwrap_or_default();
    let emoji = match prefix {
        "llama" => "\u{1F999}",
        "mixtral" => "\u{1F32A}\u{FE0F}",
        "gemma" => "\u{1F48E}",
        _ => "\u{1F916}",
    };
    format!("{emoji} Model: {model}")
}
