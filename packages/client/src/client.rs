use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    ActionAck, BookAddition, BookStatus, BusinessIdea, Health, IdeaStatus, Lifelog, Question,
    QuestionStatus, Stats,
};

/// Typed HTTP client for the Thelin Orchestrator backend.
///
/// Each operation maps to one backend endpoint: a single attempt, no retry,
/// no backoff. Failures propagate unchanged to the caller; nothing here
/// catches. Identity is handled outside this layer, so no auth headers are
/// attached.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .query(query)
            .send()
            .await?;
        Self::decode(path, response).await
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: Option<Value>) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let mut request = self
            .http
            .post(&url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> ApiResult<T> {
        match response.status() {
            status if status.is_success() => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(path.to_string())),
            status => Err(ApiError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            }),
        }
    }

    /// Backend liveness probe.
    pub async fn health(&self) -> ApiResult<Health> {
        self.get("/api/health", &[]).await
    }

    /// Aggregate counters for the dashboard.
    pub async fn stats(&self) -> ApiResult<Stats> {
        self.get("/api/stats", &[]).await
    }

    pub async fn book_additions(
        &self,
        status: Option<BookStatus>,
        limit: u32,
    ) -> ApiResult<Vec<BookAddition>> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        query.push(("limit", limit.to_string()));
        self.get("/api/book-additions", &query).await
    }

    pub async fn book_addition(&self, id: &str) -> ApiResult<BookAddition> {
        self.get(&format!("/api/book-additions/{id}"), &[]).await
    }

    /// Transition a book addition to approved. Safe to call on an already
    /// approved addition; the backend treats it as a no-op.
    pub async fn approve_book_addition(&self, id: &str) -> ApiResult<ActionAck> {
        self.post(&format!("/api/book-additions/{id}/approve"), None)
            .await
    }

    /// Transition a book addition to rejected, with optional reviewer
    /// feedback. The body is omitted entirely when there is no feedback.
    pub async fn reject_book_addition(
        &self,
        id: &str,
        feedback: Option<&str>,
    ) -> ApiResult<ActionAck> {
        let body = feedback.map(|feedback| json!({ "feedback": feedback }));
        self.post(&format!("/api/book-additions/{id}/reject"), body)
            .await
    }

    pub async fn business_ideas(
        &self,
        status: Option<IdeaStatus>,
        limit: u32,
    ) -> ApiResult<Vec<BusinessIdea>> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        query.push(("limit", limit.to_string()));
        self.get("/api/business-ideas", &query).await
    }

    pub async fn business_idea(&self, id: &str) -> ApiResult<BusinessIdea> {
        self.get(&format!("/api/business-ideas/{id}"), &[]).await
    }

    /// Set an idea's workflow status. Any status may be assigned at any
    /// time; the backend enforces no transition order.
    pub async fn update_idea_status(&self, id: &str, status: IdeaStatus) -> ApiResult<ActionAck> {
        self.post(
            &format!("/api/business-ideas/{id}/status"),
            Some(json!({ "status": status })),
        )
        .await
    }

    pub async fn questions(
        &self,
        status: QuestionStatus,
        limit: u32,
    ) -> ApiResult<Vec<Question>> {
        let query = [
            ("status", status.to_string()),
            ("limit", limit.to_string()),
        ];
        self.get("/api/questions", &query).await
    }

    /// Answer a clarifying question. Answered questions leave the pending
    /// set on the next fetch, so callers refetch rather than patch locally.
    pub async fn answer_question(&self, id: &str, answer: &str) -> ApiResult<ActionAck> {
        self.post(
            &format!("/api/questions/{id}/answer"),
            Some(json!({ "answer": answer })),
        )
        .await
    }

    pub async fn lifelogs(
        &self,
        limit: u32,
        offset: u32,
        classified_only: bool,
    ) -> ApiResult<Vec<Lifelog>> {
        let mut query = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
        if classified_only {
            query.push(("classified_only", "true".to_string()));
        }
        self.get("/api/lifelogs", &query).await
    }

    pub async fn lifelog(&self, id: &str) -> ApiResult<Lifelog> {
        self.get(&format!("/api/lifelogs/{id}"), &[]).await
    }
}
