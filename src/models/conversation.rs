#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::config::constants::{MAX_TITLE_LENGTH, TITLE_ELLIPSIS};

/// Metadata of a conversation as listed in the sidebar. Messages are kept
/// separately under their own key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    id: String,
    title: String,
}

impl Conversation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Build the conversation created by the first successful exchange. The
    /// title is derived from the user's input and never changes afterwards.
    pub fn from_first_message(id: impl Into<String>, input: &str) -> Self {
        Self::new(id, derive_title(input))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Generate a fresh conversation id.
pub fn new_conversation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Inputs longer than [`MAX_TITLE_LENGTH`] characters are cut and suffixed
/// with an ellipsis, shorter ones are used verbatim.
pub fn derive_title(input: &str) -> String {
    if input.chars().count() <= MAX_TITLE_LENGTH {
        return input.to_string();
    }
    let mut title: String = input.chars().take(MAX_TITLE_LENGTH).collect();
    title.push_str(TITLE_ELLIPSIS);
    title
}
