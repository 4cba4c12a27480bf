#[cfg(test)]
#[path = "messages_test.rs"]
mod tests;

use eyre::Result;

use crate::models::{Message, new_conversation_id};
use crate::storage::PersistentStore;

/// Messages of the conversation currently on screen.
///
/// The store is always bound to a conversation id. A fresh conversation gets
/// a newly generated id that nothing has been written under yet, so its
/// sequence starts empty.
pub struct MessageStore {
    store: PersistentStore,
    conversation_id: String,
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new(store: PersistentStore) -> Self {
        Self {
            store,
            conversation_id: new_conversation_id(),
            messages: vec![],
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn current(&self) -> &[Message] {
        &self.messages
    }

    /// Bind to `conversation_id` and reload its sequence from the store.
    pub async fn load(&mut self, conversation_id: &str) {
        self.messages = self.store.get_messages(conversation_id).await;
        self.conversation_id = conversation_id.to_string();
        log::debug!(
            "Loaded {} messages of {}",
            self.messages.len(),
            self.conversation_id
        );
    }

    /// Bind to a brand new conversation with no messages.
    pub fn reset(&mut self) {
        self.conversation_id = new_conversation_id();
        self.messages.clear();
    }

    /// Overwrite the sequence of the bound conversation, in memory and in
    /// the store.
    pub async fn replace(&mut self, messages: Vec<Message>) -> Result<()> {
        self.store
            .set_messages(&self.conversation_id, &messages)
            .await?;
        self.messages = messages;
        Ok(())
    }

    /// Append `message` to the persisted sequence of `conversation_id`.
    ///
    /// The latest persisted sequence is read and written back whole, so two
    /// appends to the same conversation never overwrite each other. The
    /// in-memory copy follows when `conversation_id` is the bound one.
    /// Returns the sequence as written.
    pub async fn append(&mut self, conversation_id: &str, message: Message) -> Result<Vec<Message>> {
        let mut messages = self.store.get_messages(conversation_id).await;
        messages.push(message);
        self.store.set_messages(conversation_id, &messages).await?;

        if conversation_id == self.conversation_id {
            self.messages = messages.clone();
        }
        Ok(messages)
    }
}
