//! Typed HTTP client for the Thelin Orchestrator backend.
//!
//! The backend owns all data and every non-trivial computation (lifelog
//! ingestion, classification, content generation). This crate is the review
//! client's view of it: serde models, an error taxonomy, and one typed
//! operation per endpoint. Responses are decoded into typed structs at the
//! boundary; anything the backend sends outside the recognized shapes is a
//! decode error, not a silently-accepted value.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use models::{
    ActionAck, BookAddition, BookStatus, BusinessIdea, Health, IdeaStatus, Lifelog, Question,
    QuestionStatus, SourceType, Stats,
};
