use super::*;
use crate::models::Message;

#[test]
fn test_send_tracking() {
    let mut state = AppState::default();
    assert_eq!(state.send_state("a"), SendState::Idle);

    state.begin_send("a");
    state.begin_send("a");
    assert!(state.send_state("a").is_pending());

    state.finish_send("a", false);
    assert_eq!(state.send_state("a"), SendState::Sending);
    state.finish_send("a", true);
    assert_eq!(state.send_state("a"), SendState::Succeeded);

    state.begin_send("b");
    state.finish_send("b", false);
    assert_eq!(state.send_state("b"), SendState::Failed);
    assert!(!state.any_pending());
}

#[test]
fn test_waiting_follows_screen() {
    let mut state = AppState::default();
    state.set_snapshot(ChatSnapshot {
        conversation_id: "a".to_string(),
        ..Default::default()
    });
    state.begin_send("a");
    assert!(state.waiting());

    state.set_snapshot(ChatSnapshot {
        conversation_id: "b".to_string(),
        ..Default::default()
    });
    assert!(!state.waiting());
    assert!(state.any_pending());
}

#[test]
fn test_active_conversation() {
    let mut state = AppState::default();
    state.set_snapshot(ChatSnapshot {
        conversations: vec![Conversation::new("a", "Hello")],
        active: Some("a".to_string()),
        conversation_id: "a".to_string(),
        messages: vec![Message::new_user("Hello"), Message::new_ai("Hi there")],
    });

    assert_eq!(state.active(), Some("a"));
    assert_eq!(state.active_conversation().map(|c| c.title()), Some("Hello"));
    assert_eq!(state.snapshot.messages.len(), 2);
}

#[test]
fn test_forget_deleted_conversation() {
    let mut state = AppState::default();
    state.begin_send("a");
    assert!(state.any_pending());

    state.forget("a");
    assert!(!state.any_pending());
    assert_eq!(state.send_state("a"), SendState::Idle);

    // A reply landing after the delete does not bring the tracker back.
    state.finish_send("a", true);
    assert_eq!(state.send_state("a"), SendState::Idle);
    assert!(state.sends.is_empty());
}
