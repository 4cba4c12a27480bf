#[cfg(test)]
#[path = "loading_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::Rect,
    style::Stylize,
    widgets::{Block, BorderType, Padding, Paragraph},
};
use ratatui_macros::line;

const FRAMES: [&str; 4] = ["●  ", " ● ", "  ●", " ● "];
const TICKS_PER_FRAME: usize = 6;

/// Spinner under the transcript while the conversation on screen waits for
/// its reply. Advanced once per UI tick.
#[derive(Default)]
pub struct Loading {
    ticks: usize,
}

impl Loading {
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    fn frame(&self) -> &'static str {
        FRAMES[(self.ticks / TICKS_PER_FRAME) % FRAMES.len()]
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let line = line![self.frame().cyan(), " Waiting for the reply".gray().italic()];
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(1));
        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
