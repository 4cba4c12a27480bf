#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding},
};

use crate::chat::ChatSnapshot;
use crate::models::Conversation;

use super::utils;

const NEW_CHAT: &str = "+ New chat";

/// Conversation list. The first row stands for a new conversation, the
/// others follow creation order.
#[derive(Default)]
pub struct Sidebar {
    state: ListState,
}

impl Sidebar {
    pub fn render(&mut self, f: &mut Frame, area: Rect, snapshot: &ChatSnapshot, pending: bool) {
        let max_width = (area.width as usize).saturating_sub(6);
        let mut items = vec![ListItem::new(Line::from(NEW_CHAT).italic())];
        items.extend(
            snapshot
                .conversations
                .iter()
                .map(|c| ListItem::new(Line::from(utils::truncate(c.title(), max_width)))),
        );

        let selected = snapshot
            .active
            .as_deref()
            .and_then(|id| position(&snapshot.conversations, id))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.state.select(Some(selected));

        let mut block = Block::default()
            .title(Line::from(" Conversations ").bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::symmetric(1, 0));
        if pending {
            block = block.title_bottom(Line::from(" sending... ").italic().dim());
        }

        let list = List::new(items)
            .block(block)
            .highlight_symbol("> ")
            .highlight_style(
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(list, area, &mut self.state);
    }
}

fn position(conversations: &[Conversation], id: &str) -> Option<usize> {
    conversations.iter().position(|c| c.id() == id)
}

/// The conversation to show after moving one row from `current`, wrapping
/// around. `None` is the new conversation row.
pub fn step(conversations: &[Conversation], current: Option<&str>, forward: bool) -> Option<String> {
    let rows = conversations.len() + 1;
    let row = current
        .and_then(|id| position(conversations, id))
        .map(|i| i + 1)
        .unwrap_or(0);

    let next = if forward {
        (row + 1) % rows
    } else {
        (row + rows - 1) % rows
    };

    match next {
        0 => None,
        i => Some(conversations[i - 1].id().to_string()),
    }
}
