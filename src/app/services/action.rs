#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use std::sync::{Arc, atomic};

use crate::chat::{SendMessage, SendOutcome, SharedChatStore};
use crate::models::{Action, Event, NoticeMessage};
use crate::{error_notice, info_notice, warn_notice};
use eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Runs the actions requested by the app against the chat store. Sends are
/// spawned so the app keeps running while replies are on their way.
pub struct ActionService {
    event_tx: mpsc::UnboundedSender<Event>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    cancel_token: CancellationToken,
    chat: SharedChatStore,
    sender: SendMessage,
    pending_tasks: Arc<atomic::AtomicUsize>,
}

impl ActionService {
    pub fn new(
        chat: SharedChatStore,
        sender: SendMessage,
        action_rx: mpsc::UnboundedReceiver<Action>,
        event_tx: mpsc::UnboundedSender<Event>,
        cancel_token: CancellationToken,
        pending_tasks: Arc<atomic::AtomicUsize>,
    ) -> ActionService {
        ActionService {
            event_tx,
            action_rx,
            cancel_token,
            chat,
            sender,
            pending_tasks,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::debug!("Action service cancelled");
                    return Ok(());
                }

                action = self.action_rx.recv() => {
                    let Some(action) = action else {
                        log::debug!("Action channel closed");
                        return Ok(());
                    };
                    self.handle(action).await;
                }
            }
        }
    }

    async fn handle(&self, action: Action) {
        match action {
            Action::SendMessage {
                conversation_id,
                input,
            } => self.spawn_send(conversation_id, input),

            Action::SetConversation(id) => {
                let activated = self.chat.lock().await.set_active(id.as_deref()).await;
                if let Some(id) = id.filter(|_| !activated) {
                    self.send_notice(warn_notice!(format!(
                        "Conversation {} not found, starting a new one",
                        id
                    )));
                }
            }

            Action::DeleteConversation(id) => {
                let result = self.chat.lock().await.delete(&id).await;
                match result {
                    Ok(true) => {
                        self.send_event(Event::ConversationDeleted(id));
                        self.send_notice(info_notice!("Conversation deleted"));
                    }
                    Ok(false) => log::debug!("Conversation {} was already gone", id),
                    Err(err) => {
                        log::error!("Failed to delete conversation {}: {:#}", id, err);
                        self.send_notice(error_notice!(format!(
                            "Failed to delete conversation: {}",
                            err
                        )));
                    }
                }
            }
        }
    }

    fn spawn_send(&self, conversation_id: String, input: String) {
        let sender = self.sender.clone();
        let event_tx = self.event_tx.clone();
        let pending_tasks = Arc::clone(&self.pending_tasks);

        pending_tasks.fetch_add(1, atomic::Ordering::SeqCst);
        tokio::spawn(async move {
            let event = match sender.send(&conversation_id, &input).await {
                Ok(SendOutcome::Replied { created, .. }) => Event::SendSucceeded {
                    conversation_id,
                    created,
                },
                // Nothing was sent, settle the pending indicator all the same.
                Ok(SendOutcome::Skipped) => Event::SendSucceeded {
                    conversation_id,
                    created: None,
                },
                Err(err) => Event::SendFailed {
                    conversation_id,
                    error: format!("{:#}", err),
                },
            };
            pending_tasks.fetch_sub(1, atomic::Ordering::SeqCst);

            if let Err(err) = event_tx.send(event) {
                log::error!("Failed to report send result: {}", err);
            }
        });
    }

    fn send_event(&self, event: Event) {
        if let Err(err) = self.event_tx.send(event) {
            log::error!("Failed to send event: {}", err);
        }
    }

    fn send_notice(&self, notice: NoticeMessage) {
        self.send_event(Event::Notice(notice));
    }
}
