use std::sync::Arc;

use super::*;
use crate::storage::{Storage, sqlite::Sqlite};

async fn setup() -> (PersistentStore, ArcStorage) {
    let storage: ArcStorage = Arc::new(Sqlite::new(None).await.expect("opening storage"));
    (PersistentStore::new(storage.clone()), storage)
}

#[test]
fn test_messages_key() {
    assert_eq!(messages_key("1234"), "messages_1234");
}

#[tokio::test]
async fn test_messages_round_trip() {
    let (store, _) = setup().await;
    let messages = vec![
        Message::new_user("Hello"),
        Message::new_ai("Hi there"),
        Message::new_user("  spaced\nmulti-line \"quoted\" ✓ "),
        Message::new_ai(""),
    ];

    store.set_messages("abc", &messages).await.unwrap();
    assert_eq!(store.get_messages("abc").await, messages);
    assert!(store.get_messages("other").await.is_empty());
}

#[tokio::test]
async fn test_conversations_round_trip() {
    let (store, storage) = setup().await;
    let conversations = vec![
        Conversation::new("b", "Second created first"),
        Conversation::new("a", "Hello"),
    ];

    store.set_conversations(&conversations).await.unwrap();
    assert_eq!(store.get_conversations().await, conversations);

    let raw = storage.get("chatRooms").await.unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"id":"b","title":"Second created first"},{"id":"a","title":"Hello"}]"#
    );
}

#[tokio::test]
async fn test_persisted_layout() {
    let (store, storage) = setup().await;
    store
        .set_messages(
            "abc",
            &[Message::new_user("Hello"), Message::new_ai("Hi there")],
        )
        .await
        .unwrap();

    let raw = storage.get("messages_abc").await.unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"role":"user","content":"Hello"},{"role":"ai","content":"Hi there"}]"#
    );
}

#[tokio::test]
async fn test_unparseable_values_read_as_empty() {
    let (store, storage) = setup().await;
    storage.set("messages_abc", "not json").await.unwrap();
    storage
        .set("chatRooms", r#"{"id":"a","title":"not a list"}"#)
        .await
        .unwrap();

    assert!(store.get_messages("abc").await.is_empty());
    assert!(store.get_conversations().await.is_empty());

    storage
        .set("messages_abc", r#"[{"role":"robot","content":"?"}]"#)
        .await
        .unwrap();
    assert!(store.get_messages("abc").await.is_empty());
}

#[tokio::test]
async fn test_remove_messages() {
    let (store, _) = setup().await;
    store
        .set_messages("abc", &[Message::new_user("Hello")])
        .await
        .unwrap();
    store.remove_messages("abc").await.unwrap();
    assert!(store.get_messages("abc").await.is_empty());

    store.remove_messages("never-existed").await.unwrap();
}
