//! Teloxide dispatch endpoints.
//!
//! Thin glue between the update stream and the orchestrator: each
//! endpoint decodes the event, runs the matching handler, and converts
//! per-request failures into user-visible notices. Nothing here escapes
//! the dispatch loop; only startup errors terminate the process.

use crate::{
    chat, keyboard,
    router::{self, Action, Command, TextRoute},
    text,
};
use murmur_core::{SessionStore, UserId};
use murmur_llm::{CompletionGateway, TranscriptionBackend, TranscriptionGateway};
use std::sync::Arc;
use teloxide::{
    ApiError, Bot, RequestError,
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    dptree,
    net::Download,
    payloads::SendMessageSetters,
    prelude::Requester,
    types::{CallbackQuery, ChatId, Message, ReplyParameters, Update, Voice},
};

/// Result type of all endpoints.
pub type HandlerResult = anyhow::Result<()>;

/// Shared application state injected into every endpoint.
pub struct App {
    /// Per-user session state.
    pub store: SessionStore,
    /// Chat-completion backend.
    pub completion: CompletionGateway,
    /// Audio-transcription backend.
    pub transcription: TranscriptionGateway,
}

/// The dptree handler schema.
///
/// Commands first, then voice, then remaining text messages, then
/// button callbacks.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.voice().is_some())
                .endpoint(on_voice),
        )
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.text().is_some())
                .endpoint(on_text),
        )
        .branch(Update::filter_callback_query().endpoint(on_callback))
}

/// Handle `/start` and `/menu`.
pub async fn on_command(bot: Bot, msg: Message, cmd: Command) -> HandlerResult {
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, text::WELCOME)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
        }
        Command::Menu => show_menu(&bot, msg.chat.id).await?,
    }
    Ok(())
}

/// Handle free text: the regenerate-control entry goes to suggestion
/// generation, everything else is a conversation turn.
pub async fn on_text(bot: Bot, msg: Message, app: Arc<App>) -> HandlerResult {
    let Some(content) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;

    match router::route_text(content) {
        TextRoute::Regenerate => send_suggestions(&bot, &app, chat_id).await?,
        TextRoute::Converse => {
            let reply = chat::converse(&app.store, &app.completion, UserId(chat_id.0), content).await;
            bot.send_message(chat_id, reply)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
            bot.send_message(chat_id, text::MENU_HINT).await?;
        }
    }
    Ok(())
}

/// Handle a voice message: download, transcribe, echo the transcript,
/// then run a normal conversation turn on it.
pub async fn on_voice(bot: Bot, msg: Message, app: Arc<App>) -> HandlerResult {
    let Some(voice) = msg.voice() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;

    let audio = match download_voice(&bot, voice).await {
        Ok(audio) => audio,
        Err(e) => {
            tracing::error!("voice download failed: {e:#}");
            bot.send_message(chat_id, text::TRANSCRIPTION_APOLOGY)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
            return Ok(());
        }
    };

    match app.transcription.transcribe(audio).await {
        Ok(transcript) => {
            bot.send_message(chat_id, text::transcript(&transcript))
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
            let reply =
                chat::converse(&app.store, &app.completion, UserId(chat_id.0), &transcript).await;
            bot.send_message(chat_id, reply)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
        }
        Err(e) => {
            tracing::error!("transcription failed: {e}");
            bot.send_message(chat_id, text::TRANSCRIPTION_APOLOGY)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
        }
    }
    Ok(())
}

/// Handle a button press.
///
/// The action runs first; the triggering interaction is then
/// acknowledged exactly once, whatever the handler's outcome.
pub async fn on_callback(bot: Bot, q: CallbackQuery, app: Arc<App>) -> HandlerResult {
    let action = q.data.as_deref().map(Action::parse).unwrap_or(Action::Ignore);

    if let Some(message) = q.regular_message() {
        let chat_id = message.chat.id;
        if let Err(e) = run_action(&bot, &app, chat_id, action).await {
            tracing::error!("callback handler failed: {e:#}");
        }
    }

    acknowledge(&bot, &q).await;
    Ok(())
}

async fn run_action(bot: &Bot, app: &App, chat_id: ChatId, action: Action) -> HandlerResult {
    let user = UserId(chat_id.0);
    match action {
        Action::Reset => {
            app.store.reset(user).await;
            bot.send_message(chat_id, text::RESET_DONE).await?;
            show_menu(bot, chat_id).await?;
        }
        Action::ChangeModel => {
            bot.send_message(chat_id, text::PICK_MODEL)
                .reply_markup(keyboard::model_menu(app.store.models()))
                .await?;
        }
        Action::ChangeCharacter => {
            bot.send_message(chat_id, text::PICK_PERSONA)
                .reply_markup(keyboard::persona_menu(app.store.personas()))
                .await?;
        }
        Action::ContextCount => {
            let count = app.store.context_count(user).await;
            bot.send_message(chat_id, text::context_count(count)).await?;
            show_menu(bot, chat_id).await?;
        }
        Action::Suggestions => send_suggestions(bot, app, chat_id).await?,
        Action::Help => {
            bot.send_message(chat_id, text::HELP).await?;
            show_menu(bot, chat_id).await?;
        }
        Action::SelectModel(model) => match app.store.set_model(user, &model).await {
            Ok(()) => {
                bot.send_message(chat_id, text::model_changed(&model)).await?;
                show_menu(bot, chat_id).await?;
            }
            Err(e) => {
                tracing::error!("rejected model selection: {e}");
                bot.send_message(chat_id, text::UNKNOWN_MODEL).await?;
            }
        },
        Action::SelectPersona(persona) => match app.store.set_persona(user, &persona).await {
            Ok(()) => {
                let name = app.store.personas().resolve(&persona).name;
                bot.send_message(chat_id, text::persona_changed(&name)).await?;
                show_menu(bot, chat_id).await?;
            }
            Err(e) => {
                tracing::error!("rejected persona selection: {e}");
                bot.send_message(chat_id, text::UNKNOWN_PERSONA).await?;
            }
        },
        Action::Ignore => {}
    }
    Ok(())
}

/// Acknowledge a callback and clear the pressed inline keyboard.
///
/// "Message is not modified" means the keyboard is already gone;
/// swallowed. Other acknowledgment failures are logged and non-fatal.
async fn acknowledge(bot: &Bot, q: &CallbackQuery) {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        tracing::error!("failed to answer callback query: {e}");
    }

    if let Some(message) = q.regular_message() {
        match bot
            .edit_message_reply_markup(message.chat.id, message.id)
            .await
        {
            Ok(_) => {}
            Err(RequestError::Api(ApiError::MessageNotModified)) => {}
            Err(e) => tracing::error!("failed to clear menu keyboard: {e}"),
        }
    }
}

async fn send_suggestions(bot: &Bot, app: &App, chat_id: ChatId) -> HandlerResult {
    match chat::suggestions(&app.store, &app.completion, UserId(chat_id.0)).await {
        Ok(suggestions) => {
            bot.send_message(chat_id, text::suggestion_intro(&suggestions.persona))
                .reply_markup(keyboard::suggestion_keyboard(&suggestions.entries))
                .await?;
        }
        Err(e) => {
            tracing::error!("suggestion generation failed: {e}");
            bot.send_message(chat_id, text::SUGGESTION_APOLOGY).await?;
        }
    }
    Ok(())
}

async fn show_menu(bot: &Bot, chat_id: ChatId) -> HandlerResult {
    bot.send_message(chat_id, text::MENU_TITLE)
        .reply_markup(keyboard::main_menu())
        .await?;
    Ok(())
}

async fn download_voice(bot: &Bot, voice: &Voice) -> anyhow::Result<Vec<u8>> {
    let file = bot.get_file(voice.file.id.clone()).await?;
    let mut audio = Vec::new();
    bot.download_file(&file.path, &mut audio).await?;
    Ok(audio)
}
