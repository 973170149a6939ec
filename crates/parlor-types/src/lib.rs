//! Shared domain types for Parlor.
//!
//! This crate contains the core domain types used across the Parlor chat
//! client: Character, Message, reply wire shapes, configuration, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod character;
pub mod chat;
pub mod config;
pub mod error;
pub mod reply;
