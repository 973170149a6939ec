//! CLI command definitions and dispatch for the `parlor` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod characters;
pub mod chat;
pub mod prompt;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with a cast of characters over a reply endpoint.
#[derive(Parser)]
#[command(name = "parlor", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat.
    Chat {
        /// Character to start with (index, slug, or name).
        #[arg(short, long)]
        character: Option<String>,

        /// Reply endpoint URL (overrides config.toml).
        #[arg(long, env = "PARLOR_ENDPOINT")]
        endpoint: Option<String>,

        /// Seed for reply pacing (overrides config.toml).
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available characters.
    #[command(alias = "ls")]
    Characters,

    /// Print the prompt a fresh conversation would send.
    Prompt {
        /// Character (index, slug, or name).
        character: String,

        /// The visitor's message.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chat_flags() {
        let cli = Cli::parse_from([
            "parlor",
            "chat",
            "--character",
            "sable",
            "--endpoint",
            "http://localhost:9000/submit",
            "--seed",
            "42",
            "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Chat {
                character,
                endpoint,
                seed,
            } => {
                assert_eq!(character.as_deref(), Some("sable"));
                assert_eq!(endpoint.as_deref(), Some("http://localhost:9000/submit"));
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected chat"),
        }
    }

    #[test]
    fn test_parse_prompt_joins_words() {
        let cli = Cli::parse_from(["parlor", "prompt", "mo", "what's", "good?"]);
        match cli.command {
            Commands::Prompt { character, text } => {
                assert_eq!(character, "mo");
                assert_eq!(text.join(" "), "what's good?");
            }
            _ => panic!("expected prompt"),
        }
    }
}
