//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and switch characters, replay history, and
//! control the session.

use std::io::{self, Write};

use console::style;

use parlor_types::character::Character;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// List the characters.
    Characters,
    /// Switch to another character by index, slug, or name.
    Switch(String),
    /// Redraw the current conversation.
    History,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Unknown command or missing argument.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd.to_lowercase(), arg.trim()),
        None => (trimmed.to_lowercase(), ""),
    };

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/characters" | "/chars" | "/who" => Some(ChatCommand::Characters),
        "/switch" | "/s" => {
            if arg.is_empty() {
                Some(ChatCommand::Unknown("/switch requires a character".to_string()))
            } else {
                Some(ChatCommand::Switch(arg.to_string()))
            }
        }
        "/history" => Some(ChatCommand::History),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Write the help text listing all available commands.
pub fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    let rows = [
        ("/help", "Show this help message"),
        ("/characters", "List the characters"),
        ("/switch <who>", "Talk to another character (index, slug, or name)"),
        ("/history", "Show this character's conversation"),
        ("/clear", "Clear the screen"),
        ("/exit", "End the chat session"),
    ];
    for (name, help) in rows {
        writeln!(out, "  {:<15} {}", style(name).cyan(), help)?;
    }
    writeln!(out)?;
    writeln!(out, "  {}", style("Ctrl+D to exit").dim())?;
    writeln!(out)
}

/// Write the roster with the current character marked.
pub fn print_characters(
    out: &mut impl Write,
    characters: &[Character],
    current: usize,
) -> io::Result<()> {
    writeln!(out)?;
    for (index, character) in characters.iter().enumerate() {
        let marker = if index == current { "›" } else { " " };
        writeln!(
            out,
            "  {} {} {:<8} {}",
            style(marker).green().bold(),
            style(index).dim(),
            style(&character.name).bold(),
            style(&character.tagline).dim()
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::character::default_characters;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/QUIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_switch() {
        assert_eq!(
            parse("/switch sable"),
            Some(ChatCommand::Switch("sable".to_string()))
        );
        assert_eq!(
            parse("/s   2  "),
            Some(ChatCommand::Switch("2".to_string()))
        );
        assert_eq!(
            parse("/switch"),
            Some(ChatCommand::Unknown("/switch requires a character".to_string()))
        );
    }

    #[test]
    fn test_parse_characters_and_history() {
        assert_eq!(parse("/characters"), Some(ChatCommand::Characters));
        assert_eq!(parse("/who"), Some(ChatCommand::Characters));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
        assert_eq!(parse("/cls"), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("what about /switch?"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }

    #[test]
    fn test_print_characters_marks_current() {
        let mut out = Vec::new();
        print_characters(&mut out, &default_characters(), 2).unwrap();
        let text = String::from_utf8(out).unwrap();
        let marked = text.lines().find(|l| l.contains('›')).unwrap();
        assert!(marked.contains("Mo"));
    }

    #[test]
    fn test_print_help_lists_switch() {
        let mut out = Vec::new();
        print_help(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("/switch"));
    }
}
