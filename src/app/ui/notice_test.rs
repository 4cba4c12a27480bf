use std::time::Duration;

use super::*;
use crate::{error_notice, info_notice};

#[test]
fn test_push_keeps_latest() {
    let mut notice = Notice::default();
    for i in 0..6 {
        notice.push(info_notice!(format!("notice {}", i)));
    }

    let messages = notice
        .toasts
        .iter()
        .map(|(n, _)| n.message())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["notice 2", "notice 3", "notice 4", "notice 5"]);
}

#[test]
fn test_errors_outlive_info() {
    let mut notice = Notice::default();
    notice.push(info_notice!("Conversation deleted"));
    notice.push(error_notice!("Failed to send message: HTTP 500"));

    notice.expire(Instant::now() + Duration::from_secs(4));
    assert_eq!(notice.toasts.len(), 1);
    assert_eq!(
        notice.toasts[0].0.message(),
        "Failed to send message: HTTP 500"
    );

    notice.expire(Instant::now() + Duration::from_secs(7));
    assert!(notice.toasts.is_empty());
}
