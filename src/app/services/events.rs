#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, MouseEventKind,
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior, interval};
use tui_textarea::{Input, Key};

use crate::{config::constants::FRAME_DURATION, models::Event};

/// The single source the chat screen waits on: terminal input, results sent
/// back by the services, and a frame tick that keeps the screen redrawing
/// while nothing else happens.
pub struct EventService {
    terminal: EventStream,
    ticker: Interval,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventService {
    pub fn event_tx(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Event {
        loop {
            tokio::select! {
                Some(event) = self.rx.recv() => return event,
                Some(read) = self.terminal.next() => match read {
                    Ok(raw) => {
                        if let Some(event) = map_crossterm(raw) {
                            return event;
                        }
                    }
                    Err(err) => log::warn!("Failed to read terminal event: {}", err),
                },
                _ = self.ticker.tick() => return Event::UiTick,
            }
        }
    }
}

impl Default for EventService {
    fn default() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut ticker = interval(FRAME_DURATION);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            terminal: EventStream::new(),
            ticker,
            tx,
            rx,
        }
    }
}

pub(crate) fn map_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Paste(text) => Some(Event::KeyboardPaste(text)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Event::UiScrollUp),
            MouseEventKind::ScrollDown => Some(Event::UiScrollDown),
            _ => None,
        },
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<Event> {
    if key.code == KeyCode::BackTab {
        return Some(Event::KeyboardBackTab);
    }

    let input = Input::from(key);
    let event = match input.key {
        Key::Enter if input.shift || input.alt => Event::KeyboardNewLine,
        Key::Char(c) if input.ctrl => match c {
            'q' => Event::Quit,
            'c' => Event::KeyboardCtrlC,
            'n' => Event::KeyboardCtrlN,
            'd' => Event::KeyboardCtrlD,
            'j' => Event::KeyboardTab,
            'k' => Event::KeyboardBackTab,
            _ => return None,
        },
        _ if input.ctrl => return None,
        Key::Esc => Event::KeyboardEsc,
        Key::Enter => Event::KeyboardEnter,
        Key::Tab if input.shift => Event::KeyboardBackTab,
        Key::Tab => Event::KeyboardTab,
        Key::Up => Event::UiScrollUp,
        Key::Down => Event::UiScrollDown,
        Key::PageUp => Event::UiScrollPageUp,
        Key::PageDown => Event::UiScrollPageDown,
        _ => Event::KeyboardCharInput(input),
    };
    Some(event)
}
