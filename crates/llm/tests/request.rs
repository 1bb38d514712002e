//! Wire-format tests for the chat-completions request body.

use murmur_llm::{ChatRequest, SamplingParams};
use murmur_core::Message;

#[test]
fn request_matches_backend_contract() {
    let messages = vec![
        Message::system("You are Default Character, a generic AI assistant. Respond accordingly."),
        Message::user("hello"),
    ];
    let req = ChatRequest::new(&messages, "llama-3.1-8b-instant", SamplingParams::CHAT);
    let json = serde_json::to_value(&req).unwrap();

    assert_eq!(json["model"], "llama-3.1-8b-instant");
    assert_eq!(json["temperature"], 0.7_f32);
    assert_eq!(json["max_tokens"], 1024);
    assert_eq!(json["top_p"], 1);
    assert_eq!(json["stream"], false);
    // `stop` must be present and literal null.
    assert!(json.as_object().unwrap().contains_key("stop"));
    assert!(json["stop"].is_null());

    let wire_messages = json["messages"].as_array().unwrap();
    assert_eq!(wire_messages.len(), 2);
    assert_eq!(wire_messages[0]["role"], "system");
    assert_eq!(wire_messages[1]["role"], "user");
    assert_eq!(wire_messages[1]["content"], "hello");
}

#[test]
fn suggestion_params_use_small_budget_high_temperature() {
    let messages = vec![Message::system("generate starters")];
    let req = ChatRequest::new(&messages, "gemma2-9b-it", SamplingParams::SUGGESTION);
    assert_eq!(req.temperature, 0.8);
    assert_eq!(req.max_tokens, 250);
}

#[test]
fn request_preserves_window_order() {
    let messages: Vec<_> = (0..6).map(|i| Message::user(format!("m{i}"))).collect();
    let req = ChatRequest::new(&messages, "llama3-8b-8192", SamplingParams::CHAT);
    assert_eq!(req.messages.len(), 6);
    assert_eq!(req.messages.last().unwrap().content, "m5");
}
