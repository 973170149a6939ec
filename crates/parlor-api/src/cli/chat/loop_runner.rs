//! Main chat loop orchestration.
//!
//! Wires the reply endpoint, pacer, and terminal surface into a
//! `ChatSessionManager`, shows the intro, then reads input until the
//! visitor exits. While a reply is being delivered the loop keeps reading
//! input only to turn it away.

use std::io::Write;
use std::time::Duration;

use console::style;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline_async::SharedWriter;
use tracing::info;

use parlor_core::character::{default_characters, find_character};
use parlor_core::chat::manager::ChatSessionManager;
use parlor_core::chat::session::SessionState;
use parlor_core::reply::BoxReplyFetcher;
use parlor_core::surface::ChatSurface;
use parlor_infra::config::{resolve_endpoint, resolve_seed};
use parlor_infra::pacer::TokioPacer;
use parlor_infra::reply::HttpReplyFetcher;
use parlor_types::config::GlobalConfig;

use super::banner::{print_intro_banner, wait_for_enter};
use super::commands::{self, ChatCommand};
use super::input::{prompt_for, ChatInput, InputEvent};
use super::surface::TerminalSurface;

/// System note shown once the intro is dismissed.
const ENTERED_NOTICE: &str = "The visitor has entered the chat!";

/// Options from `parlor chat`.
#[derive(Debug, Default)]
pub struct ChatOptions {
    pub character: Option<String>,
    pub endpoint: Option<String>,
    pub seed: Option<u64>,
}

type TerminalManager = ChatSessionManager<BoxReplyFetcher, TokioPacer, StdRng>;

/// Run the interactive chat.
pub async fn run_chat_loop(config: &GlobalConfig, options: ChatOptions) -> anyhow::Result<()> {
    let roster = default_characters();
    let start = match options.character.as_deref() {
        Some(selector) => find_character(&roster, selector)?,
        None => 0,
    };

    let endpoint = resolve_endpoint(config, options.endpoint.as_deref());
    let timeout = config.endpoint.request_timeout_secs.map(Duration::from_secs);
    let fetcher = BoxReplyFetcher::new(HttpReplyFetcher::new(endpoint.clone(), timeout));

    let rng = match resolve_seed(config, options.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let state = SessionState::new(roster)?;
    let mut manager: TerminalManager =
        ChatSessionManager::new(state, fetcher, TokioPacer, rng, config);

    print_intro_banner(manager.state().characters(), &endpoint);
    wait_for_enter().await?;

    let start_name = manager.state().characters()[start].name.clone();
    let (mut chat_input, writer) = ChatInput::new(prompt_for(&start_name))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;
    let mut notices = writer.clone();
    let mut surface = TerminalSurface::new(writer, console::colors_enabled(), true);

    manager.select_character(start, &mut surface);
    manager.show_notice(ENTERED_NOTICE, &mut surface);
    info!(endpoint = %endpoint, character = %start_name, "Chat session started");

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                write_notice(&mut notices, "Press Ctrl+D to exit, or keep chatting.");
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    let keep_going =
                        handle_command(cmd, &mut manager, &mut surface, &mut chat_input);
                    if !keep_going {
                        break;
                    }
                    continue;
                }

                let turn = manager.submit_user_message(&text, &mut surface);
                tokio::pin!(turn);
                let mut exit_requested = false;
                loop {
                    tokio::select! {
                        _ = &mut turn => break,
                        event = chat_input.read_line() => {
                            exit_requested |= reject_while_busy(event, &mut notices);
                        }
                    }
                }
                if exit_requested {
                    break;
                }
            }
        }
    }

    writeln!(notices, "\n  {}", style("Session ended.").dim()).ok();
    chat_input.flush();
    info!(
        turns = manager.state().turns_completed(),
        "Chat session ended"
    );
    Ok(())
}

/// Handle input that arrives while a reply is pending.
///
/// Returns `true` if the visitor asked to leave once the reply is in.
fn reject_while_busy(event: InputEvent, notices: &mut impl Write) -> bool {
    match event {
        InputEvent::Message(text) if text.is_empty() => false,
        InputEvent::Message(_) => {
            write_notice(notices, "Still waiting on a reply; that message was not sent.");
            false
        }
        InputEvent::Interrupted => {
            write_notice(notices, "Still waiting on a reply...");
            false
        }
        InputEvent::Eof => {
            write_notice(notices, "Leaving after this reply.");
            true
        }
    }
}

/// Run one slash command. Returns `false` when the session should end.
fn handle_command(
    cmd: ChatCommand,
    manager: &mut TerminalManager,
    surface: &mut TerminalSurface<SharedWriter>,
    chat_input: &mut ChatInput,
) -> bool {
    let result = match cmd {
        ChatCommand::Help => commands::print_help(surface.writer()),
        ChatCommand::Characters => commands::print_characters(
            surface.writer(),
            manager.state().characters(),
            manager.state().current_index(),
        ),
        ChatCommand::Switch(selector) => {
            match find_character(manager.state().characters(), &selector) {
                Ok(index) => {
                    manager.select_character(index, surface);
                    chat_input.update_prompt(&prompt_for(&manager.state().current_character().name));
                }
                Err(e) => write_notice(surface.writer(), &e.to_string()),
            }
            Ok(())
        }
        ChatCommand::History => {
            let character = manager.state().current_character();
            surface.render_conversation(character, manager.state().current_conversation().messages());
            Ok(())
        }
        ChatCommand::Clear => {
            chat_input.clear();
            Ok(())
        }
        ChatCommand::Exit => return false,
        ChatCommand::Unknown(name) => {
            write_notice(
                surface.writer(),
                &format!("Unknown command: {name}. Type /help for available commands."),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::warn!(error = %e, "Failed to write command output");
    }
    true
}

fn write_notice(out: &mut impl Write, text: &str) {
    if let Err(e) = writeln!(out, "  {}", style(text).yellow()) {
        tracing::warn!(error = %e, "Failed to write notice");
    }
}
