#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Clear, Padding, Paragraph},
};

use crate::models::NoticeMessage;

use super::utils;

const MAX_TOASTS: usize = 4;

/// Toasts stacked in the top right corner, oldest first.
#[derive(Default)]
pub struct Notice {
    toasts: VecDeque<(NoticeMessage, Instant)>,
}

impl Notice {
    pub fn push(&mut self, notice: NoticeMessage) {
        let expires_at = Instant::now() + notice.kind().ttl();
        self.toasts.push_back((notice, expires_at));
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    fn expire(&mut self, now: Instant) {
        self.toasts.retain(|(_, expires_at)| *expires_at > now);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.expire(Instant::now());
        if area.width < 6 {
            return;
        }

        let text_width = area.width.saturating_sub(4) as usize;
        let mut y = area.y;
        for (notice, _) in &self.toasts {
            let lines = utils::split_to_lines(notice.message().replace('\n', " "), text_width);
            let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
            if y.saturating_add(height) > area.bottom() {
                break;
            }

            let toast = Rect::new(area.x, y, area.width, height);
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(notice.kind().color()))
                .padding(Padding::horizontal(1));
            f.render_widget(Clear, toast);
            f.render_widget(Paragraph::new(lines).block(block), toast);
            y += height;
        }
    }
}
