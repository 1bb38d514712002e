//! Catalog and window tests.

use compact_str::CompactString;
use murmur_core::{
    DEFAULT_MODEL, DEFAULT_PERSONA_KEY, Message, ModelCatalog, Persona, PersonaCatalog, WINDOW_LEN,
    format_model_info, window,
};
use std::collections::BTreeMap;

#[test]
fn default_model_catalog_contains_baseline() {
    let catalog = ModelCatalog::default();
    assert!(catalog.contains(DEFAULT_MODEL));
    assert!(catalog.contains("mixtral-8x7b-32768"));
    assert!(!catalog.contains("gpt-4"));
    assert_eq!(catalog.iter().count(), 10);
}

#[test]
fn empty_model_list_falls_back_to_defaults() {
    let catalog = ModelCatalog::new(Vec::new());
    assert!(catalog.contains(DEFAULT_MODEL));
}

#[test]
fn model_info_emoji_by_family_prefix() {
    assert_eq!(
        format_model_info("llama-3.1-8b-instant"),
        "\u{1F999} Model: llama-3.1-8b-instant"
    );
    assert_eq!(
        format_model_info("mixtral-8x7b-32768"),
        "\u{1F32A}\u{FE0F} Model: mixtral-8x7b-32768"
    );
    assert_eq!(
        format_model_info("gemma-7b-it"),
        "\u{1F48E} Model: gemma-7b-it"
    );
    // Only the exact family prefix matches; "llama3" is not "llama".
    assert_eq!(
        format_model_info("llama3-70b-8192"),
        "\u{1F916} Model: llama3-70b-8192"
    );
}

#[test]
fn persona_system_prompt_shape() {
    let persona = Persona {
        name: "Sherlock Holmes".into(),
        description: "a brilliant consulting detective".into(),
    };
    assert_eq!(
        persona.system_prompt(),
        "You are Sherlock Holmes, a brilliant consulting detective. Respond accordingly."
    );
}

#[test]
fn empty_persona_table_degrades_to_builtin_default() {
    let catalog = PersonaCatalog::new(BTreeMap::new());
    assert!(catalog.contains(DEFAULT_PERSONA_KEY));
    assert_eq!(
        catalog.get(DEFAULT_PERSONA_KEY).unwrap().name.as_str(),
        "Default Character"
    );
}

#[test]
fn resolve_stale_key_falls_back_to_default() {
    let mut personas = BTreeMap::new();
    personas.insert(
        CompactString::const_new(DEFAULT_PERSONA_KEY),
        Persona {
            name: "Helper".into(),
            description: "a helpful assistant".into(),
        },
    );
    let catalog = PersonaCatalog::new(personas);

    let resolved = catalog.resolve("deleted-persona");
    assert_eq!(resolved.name.as_str(), "Helper");
}

#[test]
fn resolve_without_default_entry_uses_builtin() {
    let mut personas = BTreeMap::new();
    personas.insert(
        CompactString::const_new("pirate"),
        Persona {
            name: "Pirate".into(),
            description: "a salty sea captain".into(),
        },
    );
    let catalog = PersonaCatalog::new(personas);

    let resolved = catalog.resolve("deleted-persona");
    assert_eq!(resolved.name.as_str(), "Default Character");
}

#[test]
fn window_is_identity_for_short_histories() {
    let history: Vec<_> = (0..4).map(|i| Message::user(format!("{i}"))).collect();
    assert_eq!(window(&history).len(), 4);
}

#[test]
fn window_keeps_most_recent_entries_in_order() {
    let history: Vec<_> = (0..10).map(|i| Message::user(format!("{i}"))).collect();
    let slice = window(&history);
    assert_eq!(slice.len(), WINDOW_LEN);
    let contents: Vec<_> = slice.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["4", "5", "6", "7", "8", "9"]);
}

#[test]
fn roles_serialize_lowercase() {
    let message = Message::system("be brief");
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["role"], "system");
    assert_eq!(json["content"], "be brief");
}
