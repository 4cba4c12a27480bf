pub mod action;
pub mod backend;
pub mod conversation;
pub mod event;
pub mod message;
pub mod notice;

pub use backend::*;
pub use conversation::{Conversation, derive_title, new_conversation_id};
pub use message::{Message, Role};
pub use notice::*;

pub use action::*;
pub use event::Event;
