//! Interactive terminal chat for Parlor.
//!
//! Intro banner, slash commands, async readline input, and a terminal
//! `ChatSurface` that renders themed bubbles with typing spinners. Entry
//! point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod surface;
