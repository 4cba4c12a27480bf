#[cfg(test)]
#[path = "send_test.rs"]
mod tests;

use eyre::{Context, Result};

use crate::backend::ArcBackend;
use crate::models::{Conversation, GenerateRequest, Message};

use super::SharedChatStore;

/// Where a single send stands. Tracked by the terminal view to show the
/// pending indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SendState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SendState {
    pub fn is_pending(&self) -> bool {
        *self == SendState::Sending
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The input was blank, nothing was stored or sent.
    Skipped,
    Replied {
        conversation_id: String,
        reply: Message,
        /// Set when this exchange was the first one of the conversation.
        created: Option<Conversation>,
    },
}

/// One user turn: store the prompt, ask the backend, store the answer.
#[derive(Clone)]
pub struct SendMessage {
    chat: SharedChatStore,
    backend: ArcBackend,
}

impl SendMessage {
    pub fn new(chat: SharedChatStore, backend: ArcBackend) -> Self {
        Self { chat, backend }
    }

    /// The user message is persisted before the request goes out and stays
    /// in place when the request fails. The store lock is released while the
    /// request is in flight so other sends and view switches proceed.
    pub async fn send(&self, conversation_id: &str, input: &str) -> Result<SendOutcome> {
        if input.trim().is_empty() {
            log::debug!("Skipping blank input");
            return Ok(SendOutcome::Skipped);
        }

        self.chat
            .lock()
            .await
            .append_message(conversation_id, Message::new_user(input))
            .await?;

        let request = GenerateRequest::new(input, conversation_id);
        let generated = match self.backend.generate(request).await {
            Ok(generated) => generated,
            Err(err) => {
                log::error!(
                    "Failed to send message in {} via {}: {:#}",
                    conversation_id,
                    self.backend.name(),
                    err
                );
                return Err(err.wrap_err("sending message"));
            }
        };

        let reply = Message::new_ai(generated);
        let mut chat = self.chat.lock().await;
        let messages = chat
            .append_message(conversation_id, reply.clone())
            .await
            .wrap_err("saving reply")?;

        let mut created = None;
        if chat.is_deleted(conversation_id) {
            log::info!(
                "Conversation {} was deleted while waiting for the reply",
                conversation_id
            );
        } else if !chat.is_registered(conversation_id) {
            // Concurrent first sends may reply out of order, the title
            // always comes from the opening message.
            let first = messages
                .iter()
                .find(|m| m.is_user())
                .map_or(input, Message::content);
            let conversation = Conversation::from_first_message(conversation_id, first);
            chat.register(conversation.clone()).await?;
            chat.set_active(Some(conversation_id)).await;
            log::info!(
                "Created conversation {} \"{}\"",
                conversation.id(),
                conversation.title()
            );
            created = Some(conversation);
        }

        Ok(SendOutcome::Replied {
            conversation_id: conversation_id.to_string(),
            reply,
            created,
        })
    }
}
