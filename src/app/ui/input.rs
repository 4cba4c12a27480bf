use ratatui::{
    style::Style,
    widgets::{Block, BorderType, Padding},
};
use tui_textarea::TextArea;

/// An empty prompt box. Replaced wholesale after each send or Ctrl+C.
pub fn prompt<'a>() -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Message ")
            .padding(Padding::horizontal(1)),
    );
    input.set_cursor_line_style(Style::default());
    input.set_placeholder_text("Ask anything, Enter to send");
    input
}
