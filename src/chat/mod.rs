#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

pub mod messages;
pub mod registry;
pub mod send;

use std::collections::HashSet;
use std::sync::Arc;

use eyre::Result;
use tokio::sync::{Mutex, watch};

use crate::models::{Conversation, Message};
use crate::storage::PersistentStore;

pub use messages::MessageStore;
pub use registry::ConversationRegistry;
pub use send::{SendMessage, SendOutcome, SendState};

pub type SharedChatStore = Arc<Mutex<ChatStore>>;

/// What the views render: the conversation list and the transcript of the
/// conversation on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSnapshot {
    pub conversations: Vec<Conversation>,
    /// The registered conversation on screen, `None` while a new one is being
    /// drafted.
    pub active: Option<String>,
    /// The id the transcript belongs to. Equals `active` unless drafting.
    pub conversation_id: String,
    pub messages: Vec<Message>,
}

/// Owns the registry and the message store for the whole process. Every
/// change is published to subscribers as a fresh [`ChatSnapshot`].
pub struct ChatStore {
    registry: ConversationRegistry,
    messages: MessageStore,
    /// Ids are never reused, so this only grows.
    deleted: HashSet<String>,
    snapshot_tx: watch::Sender<ChatSnapshot>,
}

impl ChatStore {
    pub async fn open(store: PersistentStore) -> Self {
        let registry = ConversationRegistry::load(store.clone()).await;
        let messages = MessageStore::new(store);
        let (snapshot_tx, _) = watch::channel(ChatSnapshot::default());

        let ret = Self {
            registry,
            messages,
            deleted: HashSet::new(),
            snapshot_tx,
        };
        ret.publish();
        ret
    }

    pub fn shared(self) -> SharedChatStore {
        Arc::new(Mutex::new(self))
    }

    pub fn conversations(&self) -> &[Conversation] {
        self.registry.list()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// Whether `id` was deleted during this session.
    pub fn is_deleted(&self, id: &str) -> bool {
        self.deleted.contains(id)
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.current()
    }

    pub fn conversation_id(&self) -> &str {
        self.messages.conversation_id()
    }

    pub fn active(&self) -> Option<&str> {
        let id = self.messages.conversation_id();
        self.registry.contains(id).then_some(id)
    }

    /// Switch the conversation on screen. `None` or an unknown id starts a new
    /// conversation. Returns whether a registered conversation is now active.
    pub async fn set_active(&mut self, id: Option<&str>) -> bool {
        let activated = match id {
            Some(id) if self.registry.contains(id) => {
                self.messages.load(id).await;
                true
            }
            Some(id) => {
                log::warn!("Unknown conversation {}, starting a new one", id);
                self.messages.reset();
                false
            }
            None => {
                self.messages.reset();
                false
            }
        };
        self.publish();
        activated
    }

    pub async fn append_message(
        &mut self,
        conversation_id: &str,
        message: Message,
    ) -> Result<Vec<Message>> {
        let result = self.messages.append(conversation_id, message).await;
        self.publish();
        result
    }

    pub async fn replace_messages(&mut self, messages: Vec<Message>) -> Result<()> {
        let result = self.messages.replace(messages).await;
        self.publish();
        result
    }

    pub async fn register(&mut self, conversation: Conversation) -> Result<bool> {
        let added = self.registry.add(conversation).await?;
        if added {
            self.publish();
        }
        Ok(added)
    }

    /// Delete a conversation and its messages. Deleting the conversation on
    /// screen moves the view to a new one.
    pub async fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.registry.remove(id).await?;
        if removed {
            self.deleted.insert(id.to_string());
        }
        if self.messages.conversation_id() == id {
            self.messages.reset();
        }
        self.publish();
        Ok(removed)
    }

    pub fn subscribe(&self) -> watch::Receiver<ChatSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            conversations: self.registry.list().to_vec(),
            active: self.active().map(str::to_string),
            conversation_id: self.messages.conversation_id().to_string(),
            messages: self.messages.current().to_vec(),
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(self.snapshot());
    }
}
