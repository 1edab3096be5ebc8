use chrono::{DateTime, Utc};

use crate::model::WeatherSnapshot;

/// A location string submitted by the user at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    text: String,
    submitted_at: DateTime<Utc>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), submitted_at: Utc::now() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// Outcome of the most recent query.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryResult {
    /// No query issued yet.
    #[default]
    Idle,
    Loading,
    Success(WeatherSnapshot),
    /// User-facing text, rendered verbatim.
    Error(String),
}

impl QueryResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueryResult::Success(_) | QueryResult::Error(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            QueryResult::Idle => "idle",
            QueryResult::Loading => "loading",
            QueryResult::Success(_) => "success",
            QueryResult::Error(_) => "error",
        }
    }
}
