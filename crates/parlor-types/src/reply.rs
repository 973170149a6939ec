//! Wire shapes for the reply endpoint.
//!
//! The endpoint accepts `{ "input": "<prompt>" }` and answers with
//! `{ "ai": "<reply>" }`.

use serde::{Deserialize, Serialize};

/// Body of the POST sent to the reply endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub input: String,
}

/// Body returned by the reply endpoint on success.
///
/// A missing `ai` field is treated the same as an empty reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyResponse {
    #[serde(default)]
    pub ai: Option<String>,
}

impl ReplyResponse {
    /// The reply text with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.ai.as_deref().unwrap_or_default().trim()
    }
}
