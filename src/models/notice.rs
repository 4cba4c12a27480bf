use std::time::Duration;

use ratatui::style::Color;

#[macro_export]
macro_rules! info_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::new($crate::models::NoticeKind::Info, $msg)
    };
}

#[macro_export]
macro_rules! warn_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::new($crate::models::NoticeKind::Warning, $msg)
    };
}

#[macro_export]
macro_rules! error_notice {
    ($msg:expr) => {
        $crate::models::NoticeMessage::new($crate::models::NoticeKind::Error, $msg)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn color(self) -> Color {
        match self {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Warning => Color::Yellow,
            NoticeKind::Error => Color::LightRed,
        }
    }

    /// How long a toast of this kind stays up. Failed sends linger so the
    /// user has time to read why.
    pub fn ttl(self) -> Duration {
        match self {
            NoticeKind::Error => Duration::from_secs(6),
            NoticeKind::Info | NoticeKind::Warning => Duration::from_secs(3),
        }
    }
}

/// A toast raised by the chat screen or the action service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeMessage {
    kind: NoticeKind,
    message: String,
}

impl NoticeMessage {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
