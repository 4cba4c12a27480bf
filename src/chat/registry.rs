#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use eyre::Result;

use crate::models::Conversation;
use crate::storage::PersistentStore;

/// In-memory list of conversations, written through to the store on every
/// change. The list is loaded once at construction.
pub struct ConversationRegistry {
    store: PersistentStore,
    conversations: Vec<Conversation>,
}

impl ConversationRegistry {
    pub async fn load(store: PersistentStore) -> Self {
        let conversations = store.get_conversations().await;
        log::debug!("Loaded {} conversations", conversations.len());
        Self {
            store,
            conversations,
        }
    }

    /// Conversations in the order they were created.
    pub fn list(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns `false` without touching the store if the id is already
    /// registered.
    pub async fn add(&mut self, conversation: Conversation) -> Result<bool> {
        if self.contains(conversation.id()) {
            log::debug!("Conversation {} is already registered", conversation.id());
            return Ok(false);
        }

        let mut updated = self.conversations.clone();
        updated.push(conversation);
        self.store.set_conversations(&updated).await?;
        self.conversations = updated;
        Ok(true)
    }

    /// Drops the conversation and its messages. Returns `false` if the id is
    /// unknown.
    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        if !self.contains(id) {
            return Ok(false);
        }

        let updated = self
            .conversations
            .iter()
            .filter(|c| c.id() != id)
            .cloned()
            .collect::<Vec<_>>();
        self.store.set_conversations(&updated).await?;
        self.conversations = updated;
        self.store.remove_messages(id).await?;
        Ok(true)
    }
}
