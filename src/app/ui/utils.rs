#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// The right-hand `width` cells of `area`, where toasts stack up.
pub fn toast_area(area: Rect, width: u16) -> Rect {
    let [_, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(width)]).areas(area);
    right
}

/// Word-wrap `text` so that no line is wider than `max_width` cells. Styles
/// are kept per word. A word wider than a whole line gets a line of its own.
pub fn split_to_lines<'a>(text: impl Into<Line<'a>>, max_width: usize) -> Vec<Line<'a>> {
    let mut lines = vec![];
    let mut current: Vec<Span<'a>> = vec![];
    let mut current_width = 0;

    let pieces = text.into().spans.into_iter().flat_map(words);
    for piece in pieces {
        let width = piece.content.width();
        if current_width + width > max_width && !current.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }
        current_width += width;
        current.push(piece);
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Words and the single spaces between them, each carrying the span's style.
fn words(span: Span<'_>) -> Vec<Span<'static>> {
    let style = span.style;
    let mut out = vec![];
    for (i, word) in span.content.split(' ').enumerate() {
        if i > 0 {
            out.push(Span::styled(" ", style));
        }
        if word.width() > 0 {
            out.push(Span::styled(word.to_string(), style));
        }
    }
    out
}

/// Cut `text` to at most `max_width` cells, marking the cut with `…`.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
