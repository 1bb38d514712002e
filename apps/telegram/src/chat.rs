//! Conversation orchestration.
//!
//! The per-turn state machine: read/create the session, append the
//! system and user messages, send the bounded window downstream, and
//! reconcile the reply (or its absence) with the transcript. Suggestion
//! generation lives here too; it never touches the transcript.

use crate::text;
use compact_str::CompactString;
use murmur_core::{Message, Persona, SessionStore, UserId, window};
use murmur_llm::{CompletionBackend, SamplingParams};

/// Maximum number of conversation starters returned to the user.
pub const MAX_SUGGESTIONS: usize = 6;

/// Run one conversation turn for a user message and compose the
/// outbound reply.
///
/// The per-user session lock is held for the whole turn, so concurrent
/// events for the same identity are processed in arrival order while
/// other identities proceed in parallel.
///
/// On completion failure the transcript keeps the system and user
/// entries but gains no assistant entry, and the fixed apology text
/// stands in for the reply. The model/persona footer is appended either
/// way.
pub async fn converse<C: CompletionBackend>(
    store: &SessionStore,
    backend: &C,
    user: UserId,
    content: &str,
) -> String {
    let handle = store.entry(user);
    let mut session = handle.lock().await;

    let persona = store.personas().resolve(&session.persona);
    session.history.push(Message::system(persona.system_prompt()));
    session.history.push(Message::user(content));

    let model = session.model.clone();
    let result = backend
        .complete(window(&session.history), &model, SamplingParams::CHAT)
        .await;

    let reply = match result {
        Ok(reply) => {
            session.history.push(Message::assistant(reply.clone()));
            reply
        }
        Err(e) => {
            tracing::error!(user = user.0, "completion failed: {e}");
            text::CHAT_APOLOGY.to_owned()
        }
    };

    format!(
        "{reply}\n\n{}\n{}",
        murmur_core::format_model_info(&model),
        persona.name
    )
}

/// A generated suggestion set.
#[derive(Debug, Clone)]
pub struct Suggestions {
    /// Display name of the persona the starters were generated for.
    pub persona: CompactString,
    /// Up to [`MAX_SUGGESTIONS`] non-empty starter lines.
    pub entries: Vec<String>,
}

/// Generate conversation starters for a user's current persona and
/// model.
///
/// One-off completion call; nothing is appended to the transcript. The
/// model output is split on newlines, trimmed, and truncated — no
/// structural validation beyond dropping blank lines.
pub async fn suggestions<C: CompletionBackend>(
    store: &SessionStore,
    backend: &C,
    user: UserId,
) -> Result<Suggestions, murmur_core::RelayError> {
    let (persona, model) = {
        let handle = store.entry(user);
        let session = handle.lock().await;
        (store.personas().resolve(&session.persona), session.model.clone())
    };

    let prompt = suggestion_prompt(&persona);
    let raw = backend
        .complete(
            &[Message::system(prompt)],
            &model,
            SamplingParams::SUGGESTION,
        )
        .await?;

    let entries = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(ToOwned::to_owned)
        .collect();

    Ok(Suggestions {
        persona: persona.name,
        entries,
    })
}

/// The persona-specific instruction for suggestion generation.
fn suggestion_prompt(persona: &Persona) -> String {
    format!(
        "You are {name}, {description}. \n\
         A user wants to chat with you. Generate 6 diverse, creative, and engaging conversation \
         starters or questions that the user can ask you.\n\
         Each suggestion should:\n\
         1. Reflect your unique character and personality as {name}.\n\
         2. Be relevant to your background, expertise, or the time period you're from (if applicable).\n\
         3. Encourage interesting and in-depth conversations.\n\
         4. Be concise, not exceeding 15 words.\n\
         5. Start with an appropriate emoji that matches the topic or tone of the suggestion.\n\
         6. Be presented on a new line.\n\n\
         Mix up the types of suggestions:\n\
         - Thought-provoking questions for you to answer\n\
         - Intriguing scenarios or \"what if\" situations related to your expertise or background\n\
         - Topics for discussion that align with your interests or knowledge\n\
         - Requests for you to share a story or anecdote related to your background\n\n\
         Remember, these are suggestions for what the user might ask YOU, so phrase them accordingly.\n\
         Stay true to your character's personality, knowledge, and era throughout all suggestions. \
         in bahasa indonesia",
        name = persona.name,
        description = persona.description,
    )
}
