#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::collections::HashMap;

use crate::chat::{ChatSnapshot, SendState};
use crate::models::Conversation;

use super::ui::Transcript;

#[derive(Debug, Default, Clone, Copy)]
struct SendTracker {
    in_flight: usize,
    state: SendState,
}

/// View-side state of the chat screen: the last published store snapshot and
/// the sends still waiting for a reply.
#[derive(Default)]
pub(crate) struct AppState<'a> {
    pub snapshot: ChatSnapshot,
    pub transcript: Transcript<'a>,
    sends: HashMap<String, SendTracker>,
}

impl AppState<'_> {
    pub fn set_snapshot(&mut self, snapshot: ChatSnapshot) {
        let switched = snapshot.conversation_id != self.snapshot.conversation_id;
        self.transcript.set_messages(&snapshot.messages);
        if switched {
            self.transcript.scroll_to_bottom();
        }
        self.snapshot = snapshot;
    }

    pub fn conversation_id(&self) -> &str {
        &self.snapshot.conversation_id
    }

    pub fn active(&self) -> Option<&str> {
        self.snapshot.active.as_deref()
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        let id = self.active()?;
        self.snapshot.conversations.iter().find(|c| c.id() == id)
    }

    pub fn begin_send(&mut self, conversation_id: &str) {
        let tracker = self.sends.entry(conversation_id.to_string()).or_default();
        tracker.in_flight += 1;
        tracker.state = SendState::Sending;
    }

    pub fn finish_send(&mut self, conversation_id: &str, succeeded: bool) {
        let Some(tracker) = self.sends.get_mut(conversation_id) else {
            return;
        };
        tracker.in_flight = tracker.in_flight.saturating_sub(1);
        tracker.state = match (tracker.in_flight, succeeded) {
            (0, true) => SendState::Succeeded,
            (0, false) => SendState::Failed,
            _ => SendState::Sending,
        };
    }

    /// Drop the tracker of a deleted conversation. Replies still on their way
    /// for it are ignored.
    pub fn forget(&mut self, conversation_id: &str) {
        self.sends.remove(conversation_id);
    }

    pub fn send_state(&self, conversation_id: &str) -> SendState {
        self.sends
            .get(conversation_id)
            .map(|t| t.state)
            .unwrap_or_default()
    }

    /// Whether the conversation on screen waits for a reply.
    pub fn waiting(&self) -> bool {
        self.send_state(self.conversation_id()).is_pending()
    }

    pub fn any_pending(&self) -> bool {
        self.sends.values().any(|t| t.state.is_pending())
    }
}
