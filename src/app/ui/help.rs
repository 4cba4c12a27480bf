#[cfg(test)]
#[path = "help_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: [(&str, &str); 7] = [
    ("Enter", "send"),
    ("Alt+Enter", "newline"),
    ("Ctrl+N", "new chat"),
    ("Tab", "next chat"),
    ("Ctrl+D", "delete"),
    ("Ctrl+C", "clear"),
    ("Ctrl+Q", "quit"),
];

const SEPARATOR: &str = "  ";

/// As many key hints as fit in `width` cells, in order of importance.
pub(crate) fn hint_line(width: usize) -> Line<'static> {
    let mut spans: Vec<Span> = vec![];
    let mut used = 0;
    for (key, action) in KEY_HINTS {
        let separator = if spans.is_empty() { "" } else { SEPARATOR };
        let needed = separator.width() + key.width() + 1 + action.width();
        if used + needed > width {
            break;
        }
        used += needed;
        spans.extend([
            Span::raw(separator),
            key.light_green().bold(),
            Span::raw(" "),
            action.gray(),
        ]);
    }
    Line::from(spans)
}

pub fn render_help_line(frame: &mut Frame, area: Rect) {
    frame.render_widget(hint_line(area.width as usize), area);
}
