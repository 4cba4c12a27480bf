use super::*;

fn conversations() -> Vec<Conversation> {
    vec![
        Conversation::new("a", "First"),
        Conversation::new("b", "Second"),
        Conversation::new("c", "Third"),
    ]
}

#[test]
fn test_step_forward() {
    let conversations = conversations();
    assert_eq!(step(&conversations, None, true).as_deref(), Some("a"));
    assert_eq!(step(&conversations, Some("a"), true).as_deref(), Some("b"));
    assert_eq!(step(&conversations, Some("c"), true), None);
}

#[test]
fn test_step_backward() {
    let conversations = conversations();
    assert_eq!(step(&conversations, None, false).as_deref(), Some("c"));
    assert_eq!(step(&conversations, Some("a"), false), None);
    assert_eq!(step(&conversations, Some("c"), false).as_deref(), Some("b"));
}

#[test]
fn test_step_without_conversations() {
    assert_eq!(step(&[], None, true), None);
    assert_eq!(step(&[], None, false), None);
}

#[test]
fn test_step_from_unknown_id() {
    let conversations = conversations();
    assert_eq!(step(&conversations, Some("zzz"), true).as_deref(), Some("a"));
}
