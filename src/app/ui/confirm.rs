#[cfg(test)]
#[path = "confirm_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Paragraph},
};
use tui_textarea::Key;

use crate::models::{Conversation, Event};

use super::utils;

#[derive(Debug, PartialEq, Eq)]
pub enum Answer {
    Delete(String),
    Keep,
}

/// Asks before a conversation and all of its messages are deleted.
#[derive(Default)]
pub struct ConfirmDelete {
    target: Option<Conversation>,
}

impl ConfirmDelete {
    pub fn open(&mut self, conversation: Conversation) {
        self.target = Some(conversation);
    }

    pub fn showing(&self) -> bool {
        self.target.is_some()
    }

    /// `None` until the user answers. Any answer closes the popup.
    pub fn handle_key_event(&mut self, event: &Event) -> Option<Answer> {
        let delete = match event {
            Event::KeyboardEnter => true,
            Event::KeyboardEsc | Event::KeyboardCtrlC => false,
            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('y' | 'Y') => true,
                Key::Char('n' | 'N' | 'q') => false,
                _ => return None,
            },
            _ => return None,
        };

        let target = self.target.take()?;
        Some(if delete {
            Answer::Delete(target.id().to_string())
        } else {
            Answer::Keep
        })
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let Some(target) = &self.target else {
            return;
        };
        // Fade whatever is already drawn behind the popup.
        f.buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));

        let width = (area.width * 3 / 5).clamp(30.min(area.width), area.width);
        let question = format!("Delete \"{}\" and all of its messages?", target.title());
        let lines = utils::split_to_lines(question, width.saturating_sub(4) as usize);
        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
        let popup = utils::popup_area(area, width, height);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().light_red())
            .title(" Delete conversation ")
            .title_bottom(
                Line::from(vec![
                    " y".green().bold(),
                    " delete, ".into(),
                    "n".green().bold(),
                    " keep ".into(),
                ])
                .centered(),
            )
            .padding(Padding::horizontal(1));

        f.render_widget(Clear, popup);
        f.render_widget(Paragraph::new(lines).block(block), popup);
    }
}
