//! Session store tests.

use murmur_core::{
    DEFAULT_MODEL, DEFAULT_PERSONA_KEY, Message, ModelCatalog, PersonaCatalog, RelayError,
    SessionStore, UserId,
};

fn store() -> SessionStore {
    SessionStore::new(ModelCatalog::default(), PersonaCatalog::default())
}

#[tokio::test]
async fn entry_creates_defaults_on_first_access() {
    let store = store();
    let handle = store.entry(UserId(1));
    let session = handle.lock().await;
    assert!(session.history.is_empty());
    assert_eq!(session.model.as_str(), DEFAULT_MODEL);
    assert_eq!(session.persona.as_str(), DEFAULT_PERSONA_KEY);
}

#[tokio::test]
async fn entry_returns_same_session() {
    let store = store();
    store.append(UserId(7), Message::user("hello")).await;
    let handle = store.entry(UserId(7));
    assert_eq!(handle.lock().await.history.len(), 1);
}

#[tokio::test]
async fn append_preserves_arrival_order() {
    let store = store();
    let user = UserId(3);
    for i in 0..5 {
        store.append(user, Message::user(format!("msg {i}"))).await;
    }
    let handle = store.entry(user);
    let session = handle.lock().await;
    let contents: Vec<_> = session.history.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["msg 0", "msg 1", "msg 2", "msg 3", "msg 4"]);
}

#[tokio::test]
async fn reset_clears_history_only() {
    let store = store();
    let user = UserId(2);
    store.set_model(user, "mixtral-8x7b-32768").await.unwrap();
    store.append(user, Message::user("hi")).await;
    store.append(user, Message::assistant("hello")).await;

    store.reset(user).await;

    let handle = store.entry(user);
    let session = handle.lock().await;
    assert!(session.history.is_empty());
    assert_eq!(session.model.as_str(), "mixtral-8x7b-32768");
    assert_eq!(session.persona.as_str(), DEFAULT_PERSONA_KEY);
}

#[tokio::test]
async fn set_model_rejects_unknown_and_leaves_session_untouched() {
    let store = store();
    let user = UserId(4);
    store.append(user, Message::user("hi")).await;

    let err = store.set_model(user, "not-a-model").await.unwrap_err();
    assert!(matches!(err, RelayError::InvalidModel(m) if m == "not-a-model"));

    let handle = store.entry(user);
    let session = handle.lock().await;
    assert_eq!(session.model.as_str(), DEFAULT_MODEL);
    assert_eq!(session.history.len(), 1);
}

#[tokio::test]
async fn set_persona_rejects_unknown() {
    let store = store();
    let err = store.set_persona(UserId(5), "ghost").await.unwrap_err();
    assert!(matches!(err, RelayError::InvalidPersona(p) if p == "ghost"));

    let handle = store.entry(UserId(5));
    assert_eq!(handle.lock().await.persona.as_str(), DEFAULT_PERSONA_KEY);
}

#[tokio::test]
async fn set_model_accepts_catalog_entry() {
    let store = store();
    store
        .set_model(UserId(6), "llama-3.1-8b-instant")
        .await
        .unwrap();
    let handle = store.entry(UserId(6));
    assert_eq!(handle.lock().await.model.as_str(), "llama-3.1-8b-instant");
}

#[tokio::test]
async fn context_count_does_not_create_sessions() {
    let store = store();
    assert_eq!(store.context_count(UserId(9)).await, 0);
    store.append(UserId(9), Message::system("sys")).await;
    store.append(UserId(9), Message::user("hi")).await;
    store.append(UserId(9), Message::assistant("hello")).await;
    assert_eq!(store.context_count(UserId(9)).await, 3);
}

#[tokio::test]
async fn identities_are_isolated() {
    let store = store();
    store.append(UserId(10), Message::user("from ten")).await;
    store.set_model(UserId(10), "gemma-7b-it").await.unwrap();

    assert_eq!(store.context_count(UserId(11)).await, 0);
    let handle = store.entry(UserId(11));
    let session = handle.lock().await;
    assert_eq!(session.model.as_str(), DEFAULT_MODEL);
    assert!(session.history.is_empty());
}

#[tokio::test]
async fn concurrent_identities_do_not_interleave_histories() {
    let store = std::sync::Arc::new(store());
    let mut tasks = Vec::new();
    for id in 0..8i64 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            for i in 0..20 {
                store
                    .append(UserId(id), Message::user(format!("{id}:{i}")))
                    .await;
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
    for id in 0..8i64 {
        let handle = store.entry(UserId(id));
        let session = handle.lock().await;
        assert_eq!(session.history.len(), 20);
        for (i, message) in session.history.iter().enumerate() {
            assert_eq!(message.content, format!("{id}:{i}"));
        }
    }
}
