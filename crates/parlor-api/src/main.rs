//! Parlor CLI entry point.
//!
//! Binary name: `parlor`
//!
//! Parses CLI arguments, sets up tracing, loads `config.toml`, then dispatches
//! to the chat loop or one of the inspection commands.

mod cli;

use clap::Parser;
use clap_complete::generate;

use parlor_infra::config::load_global_config;
use parlor_infra::filesystem::resolve_data_dir;
use parlor_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::chat::loop_runner::{run_chat_loop, ChatOptions};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "parlor", &mut std::io::stdout());
        return Ok(());
    }

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let data_dir = resolve_data_dir();
    let config = load_global_config(&data_dir).await;
    tracing::debug!(data_dir = %data_dir.display(), "Configuration loaded");

    let result = match cli.command {
        Commands::Chat {
            character,
            endpoint,
            seed,
        } => {
            let options = ChatOptions {
                character,
                endpoint,
                seed,
            };
            run_chat_loop(&config, options).await
        }

        Commands::Characters => cli::characters::list_characters(cli.json),

        Commands::Prompt { character, text } => {
            cli::prompt::show_prompt(&config, &character, &text.join(" "), cli.json)
        }

        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
