//! Turning a fetch result into something the visitor can read.

use tracing::{error, warn};

use parlor_types::config::Placeholders;
use parlor_types::error::ReplyError;

/// What to show for one reply attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedReply {
    /// A reply to deliver with human pacing.
    Reply(String),
    /// An error notice shown as a single `ai` message.
    Notice(String),
}

impl ResolvedReply {
    pub fn text(&self) -> &str {
        match self {
            ResolvedReply::Reply(text) | ResolvedReply::Notice(text) => text,
        }
    }
}

/// Map a fetch result to displayed text.
///
/// - blank reply: the empty-reply placeholder (not a failure)
/// - non-2xx status: `Error: {code} {reason}`
/// - transport or parse failure: the fixed failure text
pub fn resolve_reply(result: Result<String, ReplyError>, placeholders: &Placeholders) -> ResolvedReply {
    match result {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                warn!("Reply endpoint returned an empty reply");
                ResolvedReply::Reply(placeholders.empty_reply.clone())
            } else {
                ResolvedReply::Reply(text.to_string())
            }
        }
        Err(ReplyError::Status { code, reason }) => {
            error!(status = code, reason = %reason, "Error in reply request");
            ResolvedReply::Notice(format!("Error: {code} {reason}").trim_end().to_string())
        }
        Err(e) => {
            error!(error = %e, "Error fetching reply");
            ResolvedReply::Notice(placeholders.failure.clone())
        }
    }
}
