#[cfg(test)]
#[path = "persistent_test.rs"]
mod tests;

use eyre::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::constants::{MESSAGES_KEY_PREFIX, ROOMS_KEY};
use crate::models::{Conversation, Message};

use super::ArcStorage;

pub fn messages_key(conversation_id: &str) -> String {
    format!("{}{}", MESSAGES_KEY_PREFIX, conversation_id)
}

/// Typed view over the key-value storage. This is the only writer of durable
/// chat state.
///
/// Reads never fail: a missing key, an unreadable storage or a value that
/// does not parse all come back as an empty sequence. Writes report their
/// errors so callers can surface them.
#[derive(Clone)]
pub struct PersistentStore {
    storage: ArcStorage,
}

impl PersistentStore {
    pub fn new(storage: ArcStorage) -> Self {
        Self { storage }
    }

    pub async fn get_messages(&self, conversation_id: &str) -> Vec<Message> {
        self.read(&messages_key(conversation_id)).await
    }

    pub async fn set_messages(&self, conversation_id: &str, messages: &[Message]) -> Result<()> {
        self.write(&messages_key(conversation_id), messages)
            .await
            .wrap_err(format!("saving messages of {}", conversation_id))
    }

    pub async fn remove_messages(&self, conversation_id: &str) -> Result<()> {
        self.storage
            .remove(&messages_key(conversation_id))
            .await
            .wrap_err(format!("removing messages of {}", conversation_id))
    }

    pub async fn get_conversations(&self) -> Vec<Conversation> {
        self.read(ROOMS_KEY).await
    }

    pub async fn set_conversations(&self, conversations: &[Conversation]) -> Result<()> {
        self.write(ROOMS_KEY, conversations)
            .await
            .wrap_err("saving conversations")
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.storage.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return vec![],
            Err(err) => {
                log::warn!("Failed to read {}: {:#}", key, err);
                return vec![];
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                log::warn!("Ignoring unparseable value under {}: {}", key, err);
                vec![]
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, values: &[T]) -> Result<()> {
        let raw = serde_json::to_string(values).wrap_err(format!("encoding {}", key))?;
        self.storage.set(key, &raw).await?;
        log::trace!("Wrote {} ({} items)", key, values.len());
        Ok(())
    }
}
