use std::sync::Arc;

use super::*;
use crate::models::Message;
use crate::storage::{ArcStorage, Storage, sqlite::Sqlite};

async fn setup() -> (PersistentStore, ArcStorage) {
    let storage: ArcStorage = Arc::new(Sqlite::new(None).await.expect("opening storage"));
    (PersistentStore::new(storage.clone()), storage)
}

#[tokio::test]
async fn test_load_existing() {
    let (store, _) = setup().await;
    store
        .set_conversations(&[Conversation::new("a", "Hello"), Conversation::new("b", "World")])
        .await
        .unwrap();

    let registry = ConversationRegistry::load(store).await;
    assert_eq!(registry.list().len(), 2);
    assert_eq!(registry.list()[0].id(), "a");
    assert_eq!(registry.get("b").map(|c| c.title()), Some("World"));
    assert!(!registry.contains("c"));
}

#[tokio::test]
async fn test_load_empty() {
    let (store, _) = setup().await;
    let registry = ConversationRegistry::load(store).await;
    assert!(registry.list().is_empty());
}

#[tokio::test]
async fn test_add_persists() {
    let (store, storage) = setup().await;
    let mut registry = ConversationRegistry::load(store.clone()).await;

    assert!(registry.add(Conversation::new("a", "Hello")).await.unwrap());
    assert!(registry.add(Conversation::new("b", "Next")).await.unwrap());

    let raw = storage.get("chatRooms").await.unwrap().unwrap();
    assert_eq!(
        raw,
        r#"[{"id":"a","title":"Hello"},{"id":"b","title":"Next"}]"#
    );

    let reloaded = ConversationRegistry::load(store).await;
    assert_eq!(reloaded.list(), registry.list());
}

#[tokio::test]
async fn test_add_is_idempotent() {
    let (store, _) = setup().await;
    let mut registry = ConversationRegistry::load(store.clone()).await;

    assert!(registry.add(Conversation::new("a", "Hello")).await.unwrap());
    assert!(!registry.add(Conversation::new("a", "Renamed")).await.unwrap());

    assert_eq!(registry.list().len(), 1);
    assert_eq!(registry.list()[0].title(), "Hello");
    assert_eq!(store.get_conversations().await.len(), 1);
}

#[tokio::test]
async fn test_remove() {
    let (store, storage) = setup().await;
    let mut registry = ConversationRegistry::load(store.clone()).await;
    registry.add(Conversation::new("a", "Hello")).await.unwrap();
    registry.add(Conversation::new("b", "World")).await.unwrap();
    store
        .set_messages("a", &[Message::new_user("Hello"), Message::new_ai("Hi")])
        .await
        .unwrap();

    assert!(registry.remove("a").await.unwrap());

    assert_eq!(registry.list().len(), 1);
    assert!(!registry.contains("a"));
    assert!(storage.get("messages_a").await.unwrap().is_none());
    assert_eq!(store.get_conversations().await, vec![Conversation::new("b", "World")]);
}

#[tokio::test]
async fn test_remove_unknown() {
    let (store, _) = setup().await;
    let mut registry = ConversationRegistry::load(store.clone()).await;
    registry.add(Conversation::new("a", "Hello")).await.unwrap();

    assert!(!registry.remove("zzz").await.unwrap());
    assert_eq!(registry.list().len(), 1);
}
