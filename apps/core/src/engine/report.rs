//! Analysis report: output structure of a local analysis run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::suggestion::SuggestionResult;

/// Complete result of one local analysis request.
///
/// Recomputed from scratch on every invocation; nothing is cached or carried
/// between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Extracted keywords, sorted ascending, no duplicates.
    pub keywords: Vec<String>,

    /// Suggested opening message.
    pub message: String,

    /// Ordered conversation-starter topics.
    pub topics: Vec<String>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Timestamp of analysis.
    pub timestamp: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(keywords: Vec<String>, suggestion: SuggestionResult) -> Self {
        Self {
            keywords,
            message: suggestion.message,
            topics: suggestion.topics,
            processing_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    /// Extract the message/topic pair, discarding the analysis metadata.
    pub fn into_suggestion(self) -> SuggestionResult {
        SuggestionResult {
            message: self.message,
            topics: self.topics,
        }
    }

    /// One-line summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Keywords: {}, Topics: {}, Time: {}ms",
            self.keywords.len(),
            self.topics.len(),
            self.processing_time_ms
        )
    }
}
