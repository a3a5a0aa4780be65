use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::Display;

/// Aggregate counters for the dashboard. No identity; replaced wholesale on
/// each fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub lifelogs_today: u64,
    /// Classification label -> count of lifelogs carrying it.
    pub classifications: HashMap<String, u64>,
    pub pending_questions: u64,
    pub pending_book_additions: u64,
    pub new_business_ideas: u64,
}

/// Review lifecycle of a book addition. Approved and rejected are terminal;
/// transitions happen only through the approve/reject operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookStatus {
    Pending,
    Review,
    Approved,
    Rejected,
}

/// AI-generated manuscript content derived from a lifelog, pending human
/// approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookAddition {
    pub id: String,
    pub chapter: Option<String>,
    pub content_markdown: String,
    pub status: BookStatus,
    pub created_at: DateTime<Utc>,
    pub lifelog_id: String,
    pub lifelog_content: Option<String>,
}

/// Workflow status of a business idea. Not a linear lifecycle: the user may
/// reassign any status at any time and no state is terminal here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdeaStatus {
    New,
    Reviewing,
    Approved,
    InProgress,
    Archived,
}

/// AI-extracted venture opportunity derived from a lifelog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessIdea {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub status: IdeaStatus,
    pub related_ventures: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub lifelog_id: String,
}

/// Which pipeline a clarifying question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceType {
    Book,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestionStatus {
    Pending,
    Answered,
}

/// Clarifying prompt generated by the backend pipeline. Answered exactly
/// once; an answered question leaves the pending set on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub context: Option<String>,
    pub options: Vec<String>,
    pub source_type: SourceType,
    pub created_at: DateTime<Utc>,
    pub status: QuestionStatus,
}

/// Raw capture record from the recording device. Read-only in this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lifelog {
    pub id: String,
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub classification: Option<String>,
    pub confidence: Option<f64>,
}

/// Acknowledgement returned by every write operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionAck {
    pub status: String,
    pub message: String,
}

/// Backend liveness report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn book_status_wire_names_are_snake_case() {
        let json = serde_json::to_string(&BookStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let parsed: BookStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, BookStatus::Rejected);
    }

    #[test]
    fn idea_status_in_progress_uses_underscore() {
        let json = serde_json::to_string(&IdeaStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        assert_eq!(IdeaStatus::InProgress.to_string(), "in_progress");
    }

    #[test]
    fn unknown_status_fails_to_decode() {
        let result: Result<IdeaStatus, _> = serde_json::from_str("\"mothballed\"");
        assert!(result.is_err());
    }

    #[test]
    fn book_addition_decodes_with_null_optionals() {
        // The body contains "## so the delimiter needs three hashes.
        let json = r###"{
            "id": "ba-1",
            "chapter": null,
            "content_markdown": "## Draft",
            "status": "review",
            "created_at": "2025-11-02T09:30:00Z",
            "lifelog_id": "ll-7",
            "lifelog_content": null
        }"###;
        let addition: BookAddition = serde_json::from_str(json).unwrap();
        assert_eq!(addition.status, BookStatus::Review);
        assert_eq!(addition.chapter, None);
        assert_eq!(addition.lifelog_id, "ll-7");
    }

    #[test]
    fn stats_decodes_classification_map() {
        let json = r#"{
            "lifelogs_today": 12,
            "classifications": {"book": 3, "business": 2},
            "pending_questions": 4,
            "pending_book_additions": 3,
            "new_business_ideas": 2
        }"#;
        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.lifelogs_today, 12);
        assert_eq!(stats.classifications.get("book"), Some(&3));
        assert_eq!(stats.pending_questions, 4);
    }
}
