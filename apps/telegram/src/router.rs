//! Inbound event classification.
//!
//! Callback data and free text are decoded exactly once into typed
//! routes; handlers never re-parse strings.

use crate::text;
use teloxide::utils::command::BotCommands;

/// Slash commands the bot answers.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Welcome message.
    Start,
    /// Show the main menu.
    Menu,
}

/// A decoded button-press action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Clear the conversation history.
    Reset,
    /// Show the model list.
    ChangeModel,
    /// Show the persona list.
    ChangeCharacter,
    /// Report the transcript length.
    ContextCount,
    /// Generate conversation starters.
    Suggestions,
    /// Show the help text.
    Help,
    /// Select the carried model identifier.
    SelectModel(String),
    /// Select the carried persona key.
    SelectPersona(String),
    /// Unrecognized data; acknowledged, nothing else happens.
    Ignore,
}

impl Action {
    /// Decode callback data into an action.
    ///
    /// `model_` and `character_` prefixes carry the remainder of the
    /// data verbatim as the parameter.
    pub fn parse(data: &str) -> Self {
        match data {
            "reset" => Self::Reset,
            "change_model" => Self::ChangeModel,
            "change_character" => Self::ChangeCharacter,
            "context_count" => Self::ContextCount,
            "suggestions" => Self::Suggestions,
            "help" => Self::Help,
            _ => {
                if let Some(model) = data.strip_prefix("model_") {
                    Self::SelectModel(model.to_owned())
                } else if let Some(persona) = data.strip_prefix("character_") {
                    Self::SelectPersona(persona.to_owned())
                } else {
                    Self::Ignore
                }
            }
        }
    }
}

/// Where a free-text message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRoute {
    /// The literal regenerate-control entry from the suggestion
    /// keyboard.
    Regenerate,
    /// An ordinary conversational message.
    Converse,
}

/// Route a free-text message.
pub fn route_text(text: &str) -> TextRoute {
    if text == text::REGENERATE {
        TextRoute::Regenerate
    } else {
        TextRoute::Converse
    }
}
