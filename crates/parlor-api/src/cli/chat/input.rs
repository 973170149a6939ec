//! Async readline input for the chat loop.
//!
//! Wraps `rustyline_async::Readline` so the loop can keep reading while a
//! reply is being delivered, and so output written through the returned
//! `SharedWriter` never tears the prompt line.

use console::style;
use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

/// Events produced by the input handler.
#[derive(Debug)]
pub enum InputEvent {
    /// Visitor submitted a line (already trimmed).
    Message(String),
    /// End of file (Ctrl+D).
    Eof,
    /// Interrupt signal (Ctrl+C).
    Interrupted,
}

/// Prompt text for talking to `name`.
pub fn prompt_for(name: &str) -> String {
    format!("  {} ", style(format!("You → {name} >")).green().bold())
}

/// Async input handler wrapping rustyline_async.
pub struct ChatInput {
    rl: Readline,
}

impl ChatInput {
    /// Create the input handler and the writer all chat output goes through.
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt)?;
        Ok((Self { rl }, stdout))
    }

    pub fn update_prompt(&mut self, prompt: &str) {
        if let Err(e) = self.rl.update_prompt(prompt) {
            tracing::debug!(error = %e, "Failed to update prompt");
        }
    }

    /// Read one line. Readline errors end the session like Ctrl+D.
    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let trimmed = line.trim().to_string();
                if !trimmed.is_empty() {
                    self.rl.add_history_entry(trimmed.clone());
                }
                InputEvent::Message(trimmed)
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(e) => {
                tracing::warn!(error = %e, "Readline failed, ending session");
                InputEvent::Eof
            }
        }
    }

    pub fn clear(&mut self) {
        if let Err(e) = self.rl.clear() {
            tracing::debug!(error = %e, "Failed to clear screen");
        }
    }

    /// Restore the terminal before exit.
    pub fn flush(&mut self) {
        if let Err(e) = self.rl.flush() {
            tracing::debug!(error = %e, "Failed to flush readline");
        }
    }
}
