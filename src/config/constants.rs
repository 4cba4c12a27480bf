use std::time::Duration;

/// Titles longer than this many characters are truncated
pub const MAX_TITLE_LENGTH: usize = 20;

pub const TITLE_ELLIPSIS: &str = "...";

/// Storage key of the conversation list
pub const ROOMS_KEY: &str = "chatRooms";

/// Storage key prefix of a conversation's messages
pub const MESSAGES_KEY_PREFIX: &str = "messages_";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8001";

pub const LOG_FILE_PATH: &str = "/tmp/roomchat.log";

pub const STORAGE_PATH: &str = "${HOME}/.roomchat/store.db";

pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / 30); // 30 FPS

pub const SIDEBAR_WIDTH: u16 = 32;

/// How long quitting waits for replies that are still on their way
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(15);
