use anyhow::Result;
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use thelin_client::{ApiClient, IdeaStatus};

use crate::controller;
use crate::events::{AppEvent, EventHandler};
use crate::session::Session;
use crate::state::{AppState, FollowUp, InputMode, Screen};
use crate::ui;

/// Main TUI application struct
pub struct App {
    pub state: AppState,
    client: ApiClient,
    events: Option<UnboundedSender<AppEvent>>,
    refresh_interval: u64,
    last_refresh: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(client: ApiClient, session: Session, page_size: u32, refresh_interval: u64) -> Self {
        Self {
            state: AppState::new(session, page_size),
            client,
            events: None,
            refresh_interval,
            last_refresh: Instant::now(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        let mut event_handler = EventHandler::new(250); // 250ms tick rate
        self.events = Some(event_handler.sender());

        // Initial load: dashboard batch plus the independent health probe.
        if self.state.session.is_signed_in() {
            self.fetch_current_screen();
        }

        while !self.should_quit {
            terminal.draw(|frame| {
                ui::render(frame, &self.state);
            })?;

            if let Some(event) = event_handler.next().await {
                match event {
                    AppEvent::Key(key_event) => {
                        if key_event.kind == KeyEventKind::Press {
                            self.handle_key_event(key_event.code);
                        }
                    }
                    AppEvent::Tick => self.handle_tick(),
                    AppEvent::Data(data) => {
                        if let Some(follow_up) = self.state.handle_data(data) {
                            self.handle_follow_up(follow_up);
                        }
                    }
                    AppEvent::Quit => self.quit(),
                }
            }
        }

        Ok(())
    }

    fn sender(&self) -> UnboundedSender<AppEvent> {
        // run() installs the sender before any fetch is triggered
        self.events.clone().expect("event channel not initialized")
    }

    /// Periodic refresh of the current screen, when enabled.
    fn handle_tick(&mut self) {
        if self.refresh_interval == 0 || !self.state.session.is_signed_in() {
            return;
        }
        if self.last_refresh.elapsed() >= Duration::from_secs(self.refresh_interval) {
            self.fetch_current_screen();
        }
    }

    fn handle_follow_up(&mut self, follow_up: FollowUp) {
        match follow_up {
            FollowUp::RefetchQuestionsAndStats => {
                let generation = self.state.questions.begin_fetch();
                controller::spawn_questions_fetch(
                    self.client.clone(),
                    self.sender(),
                    generation,
                    self.state.page_size,
                );
                let generation = self.state.dashboard.begin_fetch();
                controller::spawn_dashboard_fetch(
                    self.client.clone(),
                    self.sender(),
                    generation,
                    self.state.page_size,
                );
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyCode) {
        // Signed out: nothing to review, nothing to fetch.
        if !self.state.session.is_signed_in() {
            if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
                self.quit();
            }
            return;
        }

        match self.state.input_mode.clone() {
            InputMode::RejectFeedback { id, buffer } => self.handle_reject_key(key, id, buffer),
            InputMode::AnswerPick {
                id,
                options,
                selected,
                ..
            } => self.handle_answer_key(key, id, options, selected),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_reject_key(&mut self, key: KeyCode, id: String, buffer: String) {
        match key {
            KeyCode::Esc => self.state.cancel_input(),
            KeyCode::Enter => {
                self.state.cancel_input();
                if !self.state.books.begin_mutation() {
                    return;
                }
                self.state.book_detail.begin_mutation();
                let feedback = if buffer.trim().is_empty() {
                    None
                } else {
                    Some(buffer)
                };
                controller::spawn_reject(self.client.clone(), self.sender(), id, feedback);
            }
            KeyCode::Char(c) => self.state.input_push_char(c),
            KeyCode::Backspace => self.state.input_backspace(),
            _ => {}
        }
    }

    fn handle_answer_key(&mut self, key: KeyCode, id: String, options: Vec<String>, selected: usize) {
        match key {
            KeyCode::Esc => self.state.cancel_input(),
            KeyCode::Up | KeyCode::Char('k') => self.state.answer_pick_move(-1),
            KeyCode::Down | KeyCode::Char('j') => self.state.answer_pick_move(1),
            KeyCode::Enter => {
                self.state.cancel_input();
                // Submit from the options captured when the picker opened,
                // not from the current selection, which a refetch may have
                // moved to a different question.
                let Some(answer) = options.get(selected).cloned() else {
                    return;
                };
                if !self.state.questions.begin_mutation() {
                    return;
                }
                controller::spawn_answer(self.client.clone(), self.sender(), id, answer);
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('d') => self.enter_screen(Screen::Dashboard),
            KeyCode::Char('b') => self.enter_screen(Screen::BookList),
            KeyCode::Char('i') => self.enter_screen(Screen::IdeaList),
            KeyCode::Char('u') => self.enter_screen(Screen::QuestionList),
            KeyCode::Char('l') => self.enter_screen(Screen::LifelogList),
            KeyCode::Char('s') => self.enter_screen(Screen::Status),
            KeyCode::Char('r') => self.fetch_current_screen(),
            KeyCode::Tab => self.next_screen(),
            KeyCode::Esc => self.go_back(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('a') => self.approve_current_book(),
            KeyCode::Char('x') => self.reject_current_book(),
            KeyCode::Char(c @ '1'..='5') => self.set_current_idea_status(c),
            KeyCode::Char('n') => {
                if self.state.current_screen == Screen::LifelogList && self.state.lifelog_next_page()
                {
                    self.fetch_lifelogs();
                }
            }
            KeyCode::Char('p') => {
                if self.state.current_screen == Screen::LifelogList
                    && self.state.lifelog_previous_page()
                {
                    self.fetch_lifelogs();
                }
            }
            KeyCode::Char('c') => {
                if self.state.current_screen == Screen::LifelogList {
                    self.state.toggle_classified_only();
                    self.fetch_lifelogs();
                }
            }
            _ => {}
        }
    }

    fn enter_screen(&mut self, screen: Screen) {
        self.state.current_screen = screen;
        self.state.notice = None;
        self.fetch_current_screen();
    }

    fn next_screen(&mut self) {
        let next = match self.state.current_screen {
            Screen::Dashboard => Screen::BookList,
            Screen::BookList | Screen::BookDetail => Screen::IdeaList,
            Screen::IdeaList | Screen::IdeaDetail => Screen::QuestionList,
            Screen::QuestionList => Screen::LifelogList,
            Screen::LifelogList | Screen::LifelogDetail => Screen::Status,
            Screen::Status => Screen::Dashboard,
        };
        self.enter_screen(next);
    }

    fn go_back(&mut self) {
        let list = match self.state.current_screen {
            Screen::BookDetail => Screen::BookList,
            Screen::IdeaDetail => Screen::IdeaList,
            Screen::LifelogDetail => Screen::LifelogList,
            _ => {
                self.state.notice = None;
                return;
            }
        };
        self.state.detail_id = None;
        self.enter_screen(list);
    }

    /// (Re)fetch whatever the current screen shows.
    fn fetch_current_screen(&mut self) {
        self.last_refresh = Instant::now();
        match self.state.current_screen {
            Screen::Dashboard => {
                let generation = self.state.dashboard.begin_fetch();
                controller::spawn_dashboard_fetch(
                    self.client.clone(),
                    self.sender(),
                    generation,
                    self.state.page_size,
                );
                controller::spawn_health_probe(self.client.clone(), self.sender());
            }
            Screen::BookList => {
                let generation = self.state.books.begin_fetch();
                controller::spawn_books_fetch(
                    self.client.clone(),
                    self.sender(),
                    generation,
                    None,
                    self.state.page_size,
                );
            }
            Screen::BookDetail => {
                if let Some(id) = self.state.detail_id.clone() {
                    let generation = self.state.book_detail.begin_fetch();
                    controller::spawn_book_detail_fetch(
                        self.client.clone(),
                        self.sender(),
                        generation,
                        id,
                    );
                }
            }
            Screen::IdeaList => {
                let generation = self.state.ideas.begin_fetch();
                controller::spawn_ideas_fetch(
                    self.client.clone(),
                    self.sender(),
                    generation,
                    None,
                    self.state.page_size,
                );
            }
            Screen::IdeaDetail => {
                if let Some(id) = self.state.detail_id.clone() {
                    let generation = self.state.idea_detail.begin_fetch();
                    controller::spawn_idea_detail_fetch(
                        self.client.clone(),
                        self.sender(),
                        generation,
                        id,
                    );
                }
            }
            Screen::QuestionList => {
                let generation = self.state.questions.begin_fetch();
                controller::spawn_questions_fetch(
                    self.client.clone(),
                    self.sender(),
                    generation,
                    self.state.page_size,
                );
            }
            Screen::LifelogList => self.fetch_lifelogs(),
            Screen::LifelogDetail => {
                if let Some(id) = self.state.detail_id.clone() {
                    let generation = self.state.lifelog_detail.begin_fetch();
                    controller::spawn_lifelog_detail_fetch(
                        self.client.clone(),
                        self.sender(),
                        generation,
                        id,
                    );
                }
            }
            Screen::Status => {
                controller::spawn_health_probe(self.client.clone(), self.sender());
            }
        }
    }

    fn fetch_lifelogs(&mut self) {
        self.last_refresh = Instant::now();
        let generation = self.state.lifelogs.begin_fetch();
        controller::spawn_lifelogs_fetch(
            self.client.clone(),
            self.sender(),
            generation,
            self.state.page_size,
            self.state.lifelog_offset,
            self.state.classified_only,
        );
    }

    fn open_selected(&mut self) {
        match self.state.current_screen {
            Screen::BookList => {
                if let Some(id) = self.state.selected_book().map(|b| b.id.clone()) {
                    self.state.detail_id = Some(id);
                    self.enter_screen(Screen::BookDetail);
                }
            }
            Screen::IdeaList => {
                if let Some(id) = self.state.selected_idea().map(|i| i.id.clone()) {
                    self.state.detail_id = Some(id);
                    self.enter_screen(Screen::IdeaDetail);
                }
            }
            Screen::LifelogList => {
                if let Some(id) = self.state.selected_lifelog().map(|l| l.id.clone()) {
                    self.state.detail_id = Some(id);
                    self.enter_screen(Screen::LifelogDetail);
                }
            }
            Screen::QuestionList => {
                self.state.start_answer_pick();
            }
            _ => {}
        }
    }

    /// Id of the book addition an approve/reject targets on this screen.
    fn current_book_id(&self) -> Option<String> {
        match self.state.current_screen {
            Screen::BookDetail => self.state.detail_id.clone(),
            Screen::BookList => self.state.selected_book().map(|b| b.id.clone()),
            _ => None,
        }
    }

    fn approve_current_book(&mut self) {
        let Some(id) = self.current_book_id() else {
            return;
        };
        if !self.state.books.begin_mutation() {
            warn!("approve ignored: a write is already in flight");
            return;
        }
        self.state.book_detail.begin_mutation();
        controller::spawn_approve(self.client.clone(), self.sender(), id);
    }

    fn reject_current_book(&mut self) {
        let Some(id) = self.current_book_id() else {
            return;
        };
        if self.state.books.is_mutating() {
            warn!("reject ignored: a write is already in flight");
            return;
        }
        self.state.start_reject_feedback(id);
    }

    fn set_current_idea_status(&mut self, key: char) {
        let status = match key {
            '1' => IdeaStatus::New,
            '2' => IdeaStatus::Reviewing,
            '3' => IdeaStatus::Approved,
            '4' => IdeaStatus::InProgress,
            '5' => IdeaStatus::Archived,
            _ => return,
        };
        let id = match self.state.current_screen {
            Screen::IdeaDetail => self.state.detail_id.clone(),
            Screen::IdeaList => self.state.selected_idea().map(|i| i.id.clone()),
            _ => None,
        };
        let Some(id) = id else { return };
        if !self.state.ideas.begin_mutation() {
            warn!("status update ignored: a write is already in flight");
            return;
        }
        self.state.idea_detail.begin_mutation();
        controller::spawn_idea_status_update(self.client.clone(), self.sender(), id, status);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
