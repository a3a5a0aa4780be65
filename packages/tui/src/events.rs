use crossterm::event::{self, Event, KeyEvent};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use thelin_client::{
    ActionAck, ApiResult, BookAddition, BookStatus, BusinessIdea, Health, IdeaStatus, Lifelog,
    Question,
};

use crate::controller::DashboardData;

/// Event types for the TUI application
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Data(DataEvent),
    Quit,
}

/// Completion events from spawned fetch and write tasks. Fetch variants
/// carry the generation of the request that produced them so stale results
/// can be discarded on apply.
#[derive(Debug)]
pub enum DataEvent {
    Dashboard(u64, ApiResult<DashboardData>),
    Health(ApiResult<Health>),
    Books(u64, ApiResult<Vec<BookAddition>>),
    BookDetail(u64, ApiResult<BookAddition>),
    Ideas(u64, ApiResult<Vec<BusinessIdea>>),
    IdeaDetail(u64, ApiResult<BusinessIdea>),
    Questions(u64, ApiResult<Vec<Question>>),
    Lifelogs(u64, ApiResult<Vec<Lifelog>>),
    LifelogDetail(u64, ApiResult<Lifelog>),
    BookWrite {
        id: String,
        target: BookStatus,
        result: ApiResult<ActionAck>,
    },
    IdeaWrite {
        id: String,
        target: IdeaStatus,
        result: ApiResult<ActionAck>,
    },
    AnswerWrite {
        id: String,
        result: ApiResult<ActionAck>,
    },
}

/// Event handler bridging crossterm input and task completions onto one
/// channel.
pub struct EventHandler {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
    handler: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::unbounded_channel();
        let _sender = sender.clone();

        let handler = tokio::spawn(async move {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                if let Ok(has_event) = event::poll(timeout) {
                    if has_event {
                        if let Ok(Event::Key(key)) = event::read() {
                            if key.kind == event::KeyEventKind::Press {
                                let _ = _sender.send(AppEvent::Key(key));
                            }
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    let _ = _sender.send(AppEvent::Tick);
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            sender,
            receiver,
            handler,
        }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.receiver.recv().await
    }

    /// Sender handed to spawned fetch/write tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.sender.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.handler.abort();
    }
}
