use std::sync::Arc;

use super::*;
use crate::storage::{ArcStorage, Storage, sqlite::Sqlite};

async fn setup() -> (PersistentStore, ArcStorage) {
    let storage: ArcStorage = Arc::new(Sqlite::new(None).await.expect("opening storage"));
    (PersistentStore::new(storage.clone()), storage)
}

#[tokio::test]
async fn test_new_is_empty_draft() {
    let (store, storage) = setup().await;
    let messages = MessageStore::new(store);

    assert!(messages.current().is_empty());
    assert_eq!(messages.conversation_id().len(), 36);
    let key = format!("messages_{}", messages.conversation_id());
    assert!(storage.get(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_load() {
    let (store, _) = setup().await;
    let history = vec![Message::new_user("Hello"), Message::new_ai("Hi there")];
    store.set_messages("abc", &history).await.unwrap();

    let mut messages = MessageStore::new(store);
    messages.load("abc").await;
    assert_eq!(messages.conversation_id(), "abc");
    assert_eq!(messages.current(), history.as_slice());

    messages.load("unknown").await;
    assert_eq!(messages.conversation_id(), "unknown");
    assert!(messages.current().is_empty());
}

#[tokio::test]
async fn test_reset() {
    let (store, _) = setup().await;
    store
        .set_messages("abc", &[Message::new_user("Hello")])
        .await
        .unwrap();

    let mut messages = MessageStore::new(store);
    messages.load("abc").await;
    messages.reset();

    assert_ne!(messages.conversation_id(), "abc");
    assert!(messages.current().is_empty());
}

#[tokio::test]
async fn test_replace_writes_through() {
    let (store, _) = setup().await;
    let mut messages = MessageStore::new(store.clone());
    messages.load("abc").await;

    let replacement = vec![Message::new_user("a"), Message::new_ai("b")];
    messages.replace(replacement.clone()).await.unwrap();

    assert_eq!(messages.current(), replacement.as_slice());
    assert_eq!(store.get_messages("abc").await, replacement);
}

#[tokio::test]
async fn test_append_to_bound_conversation() {
    let (store, _) = setup().await;
    let mut messages = MessageStore::new(store.clone());
    messages.load("abc").await;

    messages.append("abc", Message::new_user("Hello")).await.unwrap();
    messages.append("abc", Message::new_ai("Hi there")).await.unwrap();

    let expected = vec![Message::new_user("Hello"), Message::new_ai("Hi there")];
    assert_eq!(messages.current(), expected.as_slice());
    assert_eq!(store.get_messages("abc").await, expected);
}

#[tokio::test]
async fn test_append_reads_latest() {
    let (store, _) = setup().await;
    let mut messages = MessageStore::new(store.clone());
    messages.load("abc").await;

    // Another writer landed after the load.
    store
        .set_messages("abc", &[Message::new_user("from elsewhere")])
        .await
        .unwrap();
    messages.append("abc", Message::new_ai("reply")).await.unwrap();

    let expected = vec![Message::new_user("from elsewhere"), Message::new_ai("reply")];
    assert_eq!(store.get_messages("abc").await, expected);
    assert_eq!(messages.current(), expected.as_slice());
}

#[tokio::test]
async fn test_append_to_other_conversation() {
    let (store, _) = setup().await;
    let mut messages = MessageStore::new(store.clone());
    messages.load("abc").await;

    messages.append("xyz", Message::new_ai("late reply")).await.unwrap();

    assert!(messages.current().is_empty());
    assert_eq!(messages.conversation_id(), "abc");
    assert_eq!(
        store.get_messages("xyz").await,
        vec![Message::new_ai("late reply")]
    );
}
