#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation},
};

use crate::models::{Message, Role};

use super::{Scroll, utils};

const EMPTY_HINT: &str = "Start a new conversation by typing a message below.";

/// The running transcript of the conversation on screen, wrapped to the
/// width it was last rendered at.
#[derive(Default)]
pub struct Transcript<'a> {
    lines: Vec<Line<'a>>,
    messages: Vec<Message>,
    width: usize,
    height: usize,
    pub scroll: Scroll,
}

impl Transcript<'_> {
    /// Replace the messages. Keeps following the bottom when it was already
    /// there.
    pub fn set_messages(&mut self, messages: &[Message]) {
        if self.messages == messages {
            return;
        }
        let follow = self.scroll.is_position_at_last() || messages.len() < self.messages.len();
        self.messages = messages.to_vec();
        self.rebuild();
        if follow {
            self.scroll.last();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.last();
    }

    fn rebuild(&mut self) {
        self.lines = build_lines(&self.messages, self.width);
        self.scroll.set_state(self.lines.len(), self.height);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::symmetric(1, 0));
        let inner = block.inner(area);

        if inner.width as usize != self.width || inner.height as usize != self.height {
            self.width = inner.width as usize;
            self.height = inner.height as usize;
            let at_last = self.scroll.is_position_at_last();
            self.rebuild();
            if at_last {
                self.scroll.last();
            }
        }

        if self.messages.is_empty() {
            f.render_widget(
                Paragraph::new(utils::split_to_lines(
                    Span::from(EMPTY_HINT).dim().italic(),
                    self.width,
                ))
                .block(block),
                area,
            );
            return;
        }

        let position = u16::try_from(self.scroll.position).unwrap_or(u16::MAX);
        f.render_widget(
            Paragraph::new(self.lines.clone())
                .block(block)
                .scroll((position, 0)),
            area,
        );
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut self.scroll.scrollbar_state,
        );
    }
}

fn speaker<'a>(role: Role) -> Line<'a> {
    match role {
        Role::User => Line::from(Span::styled("You", Style::default().fg(Color::LightGreen)).bold()),
        Role::Ai => Line::from(Span::styled("AI", Style::default().fg(Color::LightCyan)).bold()),
    }
}

/// Every message becomes a speaker line, its wrapped content and a blank
/// separator.
pub fn build_lines<'a>(messages: &[Message], max_width: usize) -> Vec<Line<'a>> {
    let max_width = max_width.max(1);
    let mut lines = vec![];
    for message in messages {
        lines.push(speaker(message.role()));
        for raw in message.content().lines() {
            if raw.is_empty() {
                lines.push(Line::default());
                continue;
            }
            lines.extend(utils::split_to_lines(raw.to_string(), max_width));
        }
        lines.push(Line::default());
    }
    lines
}
