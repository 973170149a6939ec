//! Infrastructure layer for Parlor.
//!
//! Contains implementations of the ports defined in `parlor-core`: the HTTP
//! reply endpoint client and the tokio-backed pacer, plus config loading and
//! data directory resolution.

pub mod config;
pub mod filesystem;
pub mod pacer;
pub mod reply;
