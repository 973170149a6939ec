//! Business logic and port definitions for Parlor.
//!
//! This crate owns the chat session: per-character conversations, prompt
//! assembly, and human-paced reply delivery. It defines the "ports" the
//! outside world implements (`ReplyFetcher`, `ChatSurface`, `Pacer`) and
//! depends only on `parlor-types` -- never on `parlor-infra` or any
//! network/terminal crate.

pub mod character;
pub mod chat;
pub mod delivery;
pub mod prompt;
pub mod reply;
pub mod surface;
