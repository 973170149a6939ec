//! Reply endpoint abstractions for Parlor.
//!
//! - `ReplyFetcher`: RPITIT trait for concrete reply backends
//! - `BoxReplyFetcher`: type-erased wrapper for runtime selection
//! - `resolve_reply`: maps a fetch result to the text shown to the visitor

pub mod box_fetcher;
pub mod fetcher;
pub mod resolve;

pub use box_fetcher::BoxReplyFetcher;
pub use fetcher::ReplyFetcher;
pub use resolve::{resolve_reply, ResolvedReply};
