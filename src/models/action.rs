pub enum Action {
    SendMessage {
        conversation_id: String,
        input: String,
    },
    /// `None` starts a fresh, not-yet-persisted conversation.
    SetConversation(Option<String>),
    DeleteConversation(String), // Conversation ID
}
