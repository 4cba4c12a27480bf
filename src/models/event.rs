use tui_textarea::Input;

use super::{Conversation, NoticeMessage};

#[derive(Debug)]
pub enum Event {
    Notice(NoticeMessage),

    SendSucceeded {
        conversation_id: String,
        created: Option<Conversation>,
    },
    SendFailed {
        conversation_id: String,
        error: String,
    },
    ConversationDeleted(String),

    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardNewLine,
    KeyboardCtrlC,
    KeyboardCtrlN,
    KeyboardCtrlD,
    KeyboardTab,
    KeyboardBackTab,
    KeyboardPaste(String),

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
    UiScrollPageUp,
    UiScrollPageDown,
}
