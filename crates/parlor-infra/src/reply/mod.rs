//! Reply endpoint implementations.

pub mod http;

pub use http::HttpReplyFetcher;
