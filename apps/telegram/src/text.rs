//! User-facing copy.
//!
//! All strings are in Bahasa Indonesia, the bot's target language.

use murmur_core::format_model_info;

/// Reply to `/start`.
pub const WELCOME: &str = "\u{1F44B} Halo! Saya adalah chatbot yang menggunakan Groq API.\n\n\
    Silakan kirim pesan untuk memulai percakapan, atau ketik /menu untuk melihat opsi yang tersedia.";

/// Caption above the main menu keyboard.
pub const MENU_TITLE: &str = "Menu:";

/// Standing hint sent after free-text turns.
pub const MENU_HINT: &str = "Ketik /menu untuk melihat opsi yang tersedia.";

/// Confirmation after a history reset.
pub const RESET_DONE: &str = "\u{1F504} Riwayat percakapan Anda telah direset.";

/// Caption above the model list.
pub const PICK_MODEL: &str = "\u{1F500} Pilih model AI:";

/// Caption above the persona list.
pub const PICK_PERSONA: &str = "\u{1F3AD} Pilih karakter bot:";

/// Substitute reply when the completion backend is unavailable.
pub const CHAT_APOLOGY: &str =
    "\u{274C} Maaf, terjadi kesalahan saat memproses permintaan Anda.";

/// Notice when suggestion generation fails.
pub const SUGGESTION_APOLOGY: &str = "\u{274C} Maaf, tidak dapat menghasilkan saran saat ini.";

/// Notice when voice transcription fails.
pub const TRANSCRIPTION_APOLOGY: &str =
    "\u{274C} Maaf, terjadi kesalahan saat mentranskripsikan pesan suara.";

/// Reply-keyboard control entry that regenerates suggestions.
pub const REGENERATE: &str = "\u{1F504} Generate Saran Baru";

/// Notice when a callback carries a model id outside the catalog.
pub const UNKNOWN_MODEL: &str = "\u{26A0}\u{FE0F} Model tidak dikenal.";

/// Notice when a callback carries a persona key outside the catalog.
pub const UNKNOWN_PERSONA: &str = "\u{26A0}\u{FE0F} Karakter tidak dikenal.";

/// Reply to the help button.
pub const HELP: &str = "\u{2753} Bantuan:\n\n\
    \u{2022} \u{1F4AC} Kirim pesan untuk memulai percakapan\n\
    \u{2022} \u{1F3A4} Kirim pesan suara untuk transkripsi\n\
    \u{2022} \u{1F504} 'Reset' untuk memulai percakapan baru\n\
    \u{2022} \u{1F500} 'Model' untuk ganti model AI\n\
    \u{2022} \u{1F3AD} 'Karakter' untuk ganti karakter bot\n\
    \u{2022} \u{1F4CA} 'Konteks' untuk cek jumlah pesan\n\
    \u{2022} \u{1F4A1} 'Ide Topik' untuk mendapatkan ide percakapan\n\
    \u{2022} \u{1F50D} Ketik /menu untuk menu utama";

/// Context-count report.
pub fn context_count(count: usize) -> String {
    format!("\u{1F4CA} Jumlah pesan dalam konteks: {count}")
}

/// Confirmation after a model change.
pub fn model_changed(model: &str) -> String {
    format!("\u{2705} Model AI diubah ke:\n{}", format_model_info(model))
}

/// Confirmation after a persona change.
pub fn persona_changed(name: &str) -> String {
    format!("\u{2705} Karakter diubah ke:\n{name}")
}

/// Intro line above the suggestion keyboard.
pub fn suggestion_intro(persona: &str) -> String {
    format!(
        "\u{1F4A1} Berikut adalah beberapa pertanyaan yang bisa Anda ajukan kepada {persona}. \
         Pilih salah satu, ketik pesan Anda sendiri, atau generate saran baru:"
    )
}

/// Echo of a successful voice transcription.
pub fn transcript(text: &str) -> String {
    format!("\u{1F3A4} Transkripsi:\n\n{text}")
}
