use crate::chat::ChatSnapshot;
use crate::config::constants::SIDEBAR_WIDTH;
use crate::models::{Action, Event};
use crate::{error_notice, info_notice, warn_notice};
use eyre::Result;
use ratatui::{
    Terminal,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Backend,
    widgets::Paragraph,
};
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::app::{
    app_state::AppState,
    ui::{ConfirmDelete, Loading, Notice, Sidebar, confirm::Answer, help, input, sidebar, utils},
};

use super::services::EventService;

const MIN_WIDTH: u16 = 60;

pub struct App<'a> {
    action_tx: mpsc::UnboundedSender<Action>,
    events: &'a mut EventService,
    snapshots: watch::Receiver<ChatSnapshot>,

    app_state: AppState<'a>,
    sidebar: Sidebar,
    input: tui_textarea::TextArea<'a>,

    confirm: ConfirmDelete,

    notice: Notice,
    loading: Loading,

    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        events: &'a mut EventService,
        snapshots: watch::Receiver<ChatSnapshot>,
        cancel_token: CancellationToken,
    ) -> App<'a> {
        App {
            action_tx,
            events,
            snapshots,
            app_state: AppState::default(),
            sidebar: Sidebar::default(),
            input: input::prompt(),
            confirm: ConfirmDelete::default(),
            notice: Notice::default(),
            loading: Loading::default(),
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = super::setup_terminal()?;
        let result = self.start_loop(&mut terminal).await;
        self.cancel_token.cancel();
        super::restore_terminal();
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.sync_snapshot();
            self.render(terminal)?;
            if self.handle_key_event().await {
                return Ok(());
            }
        }
    }

    fn sync_snapshot(&mut self) {
        if !self.snapshots.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = self.snapshots.borrow_and_update().clone();
        self.app_state.set_snapshot(snapshot);
    }

    async fn handle_key_event(&mut self) -> bool {
        let event = self.events.next().await;

        if let Some(stop) = self.handle_global_event(&event) {
            return stop;
        }

        if self.confirm.showing() {
            if let Some(Answer::Delete(id)) = self.confirm.handle_key_event(&event) {
                self.dispatch(Action::DeleteConversation(id));
            }
            return false;
        }

        self.handle_input_event(event);
        false
    }

    fn handle_global_event(&mut self, event: &Event) -> Option<bool> {
        match event {
            Event::Quit => {
                if self.app_state.any_pending() {
                    log::info!("Quitting with replies still in flight");
                }
                Some(true)
            }

            Event::SendSucceeded {
                conversation_id,
                created,
            } => {
                self.app_state.finish_send(conversation_id, true);
                if let Some(conversation) = created {
                    self.notice
                        .push(info_notice!(format!("Started \"{}\"", conversation.title())));
                }
                Some(false)
            }

            Event::SendFailed {
                conversation_id,
                error,
            } => {
                self.app_state.finish_send(conversation_id, false);
                self.notice.push(error_notice!(format!(
                    "Failed to send message: {}",
                    error
                )));
                Some(false)
            }

            Event::ConversationDeleted(id) => {
                self.app_state.forget(id);
                Some(false)
            }

            Event::Notice(msg) => {
                self.notice.push(msg.clone());
                Some(false)
            }

            Event::UiTick => {
                self.loading.tick();
                Some(false)
            }

            _ => None,
        }
    }

    fn handle_input_event(&mut self, event: Event) {
        match event {
            Event::KeyboardCharInput(c) => {
                self.input.input(c);
            }

            Event::KeyboardCtrlC => self.input = input::prompt(),

            Event::KeyboardCtrlN => {
                if self.app_state.active().is_some() {
                    self.dispatch(Action::SetConversation(None));
                }
            }

            Event::KeyboardTab => self.step_conversation(true),
            Event::KeyboardBackTab => self.step_conversation(false),

            Event::KeyboardCtrlD => match self.app_state.active_conversation() {
                Some(conversation) => self.confirm.open(conversation.clone()),
                None => self
                    .notice
                    .push(warn_notice!("This conversation is not saved yet")),
            },

            Event::KeyboardPaste(text) => {
                self.input.set_yank_text(text.replace('\r', "\n"));
                self.input.paste();
            }

            Event::KeyboardNewLine => self.input.insert_newline(),

            Event::KeyboardEnter => self.handle_send(),

            Event::UiScrollDown => self.app_state.transcript.scroll.down(),
            Event::UiScrollUp => self.app_state.transcript.scroll.up(),
            Event::UiScrollPageDown => self.app_state.transcript.scroll.page_down(),
            Event::UiScrollPageUp => self.app_state.transcript.scroll.page_up(),
            _ => {}
        }
    }

    fn handle_send(&mut self) {
        let input = self.input.lines().join("\n");
        if input.trim().is_empty() {
            return;
        }

        let conversation_id = self.app_state.conversation_id().to_string();
        self.app_state.begin_send(&conversation_id);
        self.input = input::prompt();
        self.app_state.transcript.scroll_to_bottom();
        self.dispatch(Action::SendMessage {
            conversation_id,
            input,
        });
    }

    fn step_conversation(&mut self, forward: bool) {
        let target = sidebar::step(
            &self.app_state.snapshot.conversations,
            self.app_state.active(),
            forward,
        );
        if target.as_deref() == self.app_state.active() {
            return;
        }
        if let Some(conversation) = target
            .as_deref()
            .and_then(|id| self.app_state.snapshot.conversations.iter().find(|c| c.id() == id))
        {
            self.notice
                .push(info_notice!(format!("Switching to \"{}\"", conversation.title())));
        }
        self.dispatch(Action::SetConversation(target));
    }

    fn dispatch(&mut self, action: Action) {
        if let Err(err) = self.action_tx.send(action) {
            log::error!("Failed to dispatch action: {}", err);
            self.notice
                .push(error_notice!("Background service is not running"));
        }
    }

    fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            let width = f.area().width;
            if width < MIN_WIDTH {
                let message = format!(
                    "The window is {} columns wide, roomchat needs at least {}.",
                    width, MIN_WIDTH
                );
                f.render_widget(
                    Paragraph::new(utils::split_to_lines(message, width as usize))
                        .alignment(Alignment::Center),
                    f.area(),
                );
                return;
            }

            let [sidebar_area, main_area] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .areas(f.area());

            let waiting = self.app_state.waiting();
            let textarea_len = u16::try_from(self.input.lines().len() + 2).unwrap_or(u16::MAX);
            let [transcript_area, loading_area, input_area, help_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(if waiting { 3 } else { 0 }),
                    Constraint::Max(textarea_len),
                    Constraint::Length(1),
                ])
                .areas(main_area);

            self.sidebar.render(
                f,
                sidebar_area,
                &self.app_state.snapshot,
                self.app_state.any_pending(),
            );
            self.app_state.transcript.render(f, transcript_area);
            if waiting {
                self.loading.render(f, loading_area);
            }
            f.render_widget(&self.input, input_area);
            help::render_help_line(f, help_area);

            let area = f.area();
            self.confirm.render(f, area);

            self.notice.render(f, utils::toast_area(area, (area.width / 3).max(24)));
        })?;
        Ok(())
    }
}
