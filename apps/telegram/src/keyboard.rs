//! Keyboard layouts.
//!
//! Inline grids for the persistent menus and a one-shot reply keyboard
//! for suggestions, laid out like the original bot: menu and persona
//! list two per row, model list one per row.

use crate::text;
use murmur_core::{ModelCatalog, PersonaCatalog, format_model_info};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

/// The main menu grid.
pub fn main_menu() -> InlineKeyboardMarkup {
    let buttons = [
        ("\u{1F504} Reset", "reset"),
        ("\u{1F500} Model", "change_model"),
        ("\u{1F3AD} Karakter", "change_character"),
        ("\u{1F4CA} Konteks", "context_count"),
        ("\u{1F4A1} Ide Topik", "suggestions"),
        ("\u{2753} Bantuan", "help"),
    ];
    InlineKeyboardMarkup::new(buttons.chunks(2).map(|row| {
        row.iter()
            .map(|(label, data)| InlineKeyboardButton::callback(*label, *data))
            .collect::<Vec<_>>()
    }))
}

/// The model list, one entry per row, `model_<id>` callback data.
pub fn model_menu(models: &ModelCatalog) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(models.iter().map(|model| {
        vec![InlineKeyboardButton::callback(
            format_model_info(model),
            format!("model_{model}"),
        )]
    }))
}

/// The persona list, two entries per row, `character_<key>` callback
/// data.
pub fn persona_menu(personas: &PersonaCatalog) -> InlineKeyboardMarkup {
    let buttons: Vec<_> = personas
        .iter()
        .map(|(key, persona)| {
            InlineKeyboardButton::callback(persona.name.to_string(), format!("character_{key}"))
        })
        .collect();
    InlineKeyboardMarkup::new(buttons.chunks(2).map(<[_]>::to_vec))
}

/// The one-shot suggestion keyboard plus the regenerate control entry.
pub fn suggestion_keyboard(suggestions: &[String]) -> KeyboardMarkup {
    let rows = suggestions
        .iter()
        .map(|s| vec![KeyboardButton::new(s)])
        .chain(std::iter::once(vec![KeyboardButton::new(text::REGENERATE)]));
    KeyboardMarkup::new(rows).resize_keyboard().one_time_keyboard()
}
