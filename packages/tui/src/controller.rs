//! Spawned fetch and write tasks.
//!
//! Every network call runs on a spawned tokio task and reports back through
//! the app's event channel, so the render loop never awaits I/O. Fetch tasks
//! carry the page generation they were started under; the state layer drops
//! results whose generation is no longer current.

use tokio::sync::mpsc::UnboundedSender;

use thelin_client::{
    ApiClient, ApiResult, BookAddition, BookStatus, BusinessIdea, IdeaStatus, Question,
    QuestionStatus,
};

use crate::events::{AppEvent, DataEvent};

/// How many recent items each dashboard pane shows.
const DASHBOARD_PANE_LIMIT: u32 = 5;

/// The dashboard's aggregate: four independent reads fetched as one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub stats: thelin_client::Stats,
    pub recent_books: Vec<BookAddition>,
    pub recent_ideas: Vec<BusinessIdea>,
    pub pending_questions: Vec<Question>,
}

/// Four-way concurrent fan-out. One failed read fails the whole batch; the
/// dashboard renders all sections or none.
pub async fn fetch_dashboard(client: &ApiClient, question_limit: u32) -> ApiResult<DashboardData> {
    let (stats, recent_books, recent_ideas, pending_questions) = tokio::try_join!(
        client.stats(),
        client.book_additions(None, DASHBOARD_PANE_LIMIT),
        client.business_ideas(None, DASHBOARD_PANE_LIMIT),
        client.questions(QuestionStatus::Pending, question_limit),
    )?;
    Ok(DashboardData {
        stats,
        recent_books,
        recent_ideas,
        pending_questions,
    })
}

pub fn spawn_dashboard_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    question_limit: u32,
) {
    tokio::spawn(async move {
        let result = fetch_dashboard(&client, question_limit).await;
        let _ = events.send(AppEvent::Data(DataEvent::Dashboard(generation, result)));
    });
}

/// Independent liveness probe; only drives the connectivity indicator.
pub fn spawn_health_probe(client: ApiClient, events: UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let result = client.health().await;
        let _ = events.send(AppEvent::Data(DataEvent::Health(result)));
    });
}

pub fn spawn_books_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    status: Option<BookStatus>,
    limit: u32,
) {
    tokio::spawn(async move {
        let result = client.book_additions(status, limit).await;
        let _ = events.send(AppEvent::Data(DataEvent::Books(generation, result)));
    });
}

pub fn spawn_book_detail_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    id: String,
) {
    tokio::spawn(async move {
        let result = client.book_addition(&id).await;
        let _ = events.send(AppEvent::Data(DataEvent::BookDetail(generation, result)));
    });
}

pub fn spawn_ideas_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    status: Option<IdeaStatus>,
    limit: u32,
) {
    tokio::spawn(async move {
        let result = client.business_ideas(status, limit).await;
        let _ = events.send(AppEvent::Data(DataEvent::Ideas(generation, result)));
    });
}

pub fn spawn_idea_detail_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    id: String,
) {
    tokio::spawn(async move {
        let result = client.business_idea(&id).await;
        let _ = events.send(AppEvent::Data(DataEvent::IdeaDetail(generation, result)));
    });
}

pub fn spawn_questions_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    limit: u32,
) {
    tokio::spawn(async move {
        let result = client.questions(QuestionStatus::Pending, limit).await;
        let _ = events.send(AppEvent::Data(DataEvent::Questions(generation, result)));
    });
}

pub fn spawn_lifelogs_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    limit: u32,
    offset: u32,
    classified_only: bool,
) {
    tokio::spawn(async move {
        let result = client.lifelogs(limit, offset, classified_only).await;
        let _ = events.send(AppEvent::Data(DataEvent::Lifelogs(generation, result)));
    });
}

pub fn spawn_lifelog_detail_fetch(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    generation: u64,
    id: String,
) {
    tokio::spawn(async move {
        let result = client.lifelog(&id).await;
        let _ = events.send(AppEvent::Data(DataEvent::LifelogDetail(generation, result)));
    });
}

pub fn spawn_approve(client: ApiClient, events: UnboundedSender<AppEvent>, id: String) {
    tokio::spawn(async move {
        let result = client.approve_book_addition(&id).await;
        let _ = events.send(AppEvent::Data(DataEvent::BookWrite {
            id,
            target: BookStatus::Approved,
            result,
        }));
    });
}

pub fn spawn_reject(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    id: String,
    feedback: Option<String>,
) {
    tokio::spawn(async move {
        let result = client.reject_book_addition(&id, feedback.as_deref()).await;
        let _ = events.send(AppEvent::Data(DataEvent::BookWrite {
            id,
            target: BookStatus::Rejected,
            result,
        }));
    });
}

pub fn spawn_idea_status_update(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    id: String,
    status: IdeaStatus,
) {
    tokio::spawn(async move {
        let result = client.update_idea_status(&id, status).await;
        let _ = events.send(AppEvent::Data(DataEvent::IdeaWrite {
            id,
            target: status,
            result,
        }));
    });
}

pub fn spawn_answer(
    client: ApiClient,
    events: UnboundedSender<AppEvent>,
    id: String,
    answer: String,
) {
    tokio::spawn(async move {
        let result = client.answer_question(&id, &answer).await;
        let _ = events.send(AppEvent::Data(DataEvent::AnswerWrite { id, result }));
    });
}
