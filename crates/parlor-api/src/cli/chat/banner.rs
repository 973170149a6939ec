//! Intro banner shown before the chat starts.

use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};

use parlor_types::character::Character;

/// Print the intro screen: the cast and where replies come from.
pub fn print_intro_banner(characters: &[Character], endpoint: &str) {
    println!();
    println!("  {}", style("Parlor").cyan().bold());
    println!("  {}", style("Five characters, one conversation each.").dim());
    println!();
    for (index, character) in characters.iter().enumerate() {
        println!(
            "  {} {}  {}",
            style(index).dim(),
            style(&character.name).bold(),
            style(&character.tagline).dim()
        );
    }
    println!();
    println!("  {}  {}", style("Endpoint:").bold(), style(endpoint).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("Press Enter to begin...").green());
}

/// Block until the visitor presses Enter.
pub async fn wait_for_enter() -> std::io::Result<()> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(())
}
