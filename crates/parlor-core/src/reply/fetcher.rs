//! ReplyFetcher trait definition.
//!
//! This is the seam between the chat session and the remote endpoint that
//! turns a prompt into a reply.

use std::future::Future;

use parlor_types::error::ReplyError;

/// Trait for reply backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in parlor-infra (e.g., `HttpReplyFetcher`).
pub trait ReplyFetcher: Send + Sync {
    /// Human-readable backend name, used in tracing spans.
    fn name(&self) -> &str;

    /// Send a prompt and receive the reply text.
    ///
    /// The returned text is trimmed and may be empty; callers decide how
    /// to present an empty reply.
    fn fetch(&self, prompt: &str) -> impl Future<Output = Result<String, ReplyError>> + Send;
}
