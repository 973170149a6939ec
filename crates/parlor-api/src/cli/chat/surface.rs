//! Terminal rendering surface.
//!
//! Draws messages as themed lines, shows thinking/typing spinners with
//! indicatif, and colors names and bubbles from the active character's
//! palette. All text goes through a `Write` (the readline `SharedWriter` in
//! the real loop, a byte buffer in tests).

use std::io::Write;
use std::time::Duration;

use console::style;
use crossterm::style::{Color, Stylize};
use indicatif::{ProgressBar, ProgressStyle};

use parlor_core::surface::{ChatSurface, Indicator};
use parlor_types::character::{parse_hex_color, Character, ThemePalette};
use parlor_types::chat::{Message, MessageRole};

/// Palette colors resolved for the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct TerminalPalette {
    bubble_bg: Option<Color>,
    bubble_text: Option<Color>,
    input: Option<Color>,
    name: Option<Color>,
}

impl TerminalPalette {
    fn from_theme(theme: &ThemePalette) -> Self {
        let rgb = |value: &str| parse_hex_color(value).map(|(r, g, b)| Color::Rgb { r, g, b });
        Self {
            bubble_bg: rgb(&theme.bubble_background),
            bubble_text: rgb(&theme.bubble_text),
            input: rgb(&theme.input_box),
            name: rgb(&theme.name_label),
        }
    }
}

/// `ChatSurface` that writes to a terminal.
pub struct TerminalSurface<W: Write> {
    out: W,
    colors: bool,
    spinners: bool,
    palette: TerminalPalette,
    spinner: Option<ProgressBar>,
}

impl<W: Write> TerminalSurface<W> {
    /// `colors` enables 24-bit theme colors; `spinners` draws indicators on
    /// stderr instead of keeping them hidden.
    pub fn new(out: W, colors: bool, spinners: bool) -> Self {
        Self {
            out,
            colors,
            spinners,
            palette: TerminalPalette::default(),
            spinner: None,
        }
    }

    /// Direct access to the writer, for command output between turns.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    fn paint(&self, text: &str, fg: Option<Color>, bg: Option<Color>, bold: bool) -> String {
        if !self.colors {
            return text.to_string();
        }
        let mut styled = text.stylize();
        if let Some(fg) = fg {
            styled = styled.with(fg);
        }
        if let Some(bg) = bg {
            styled = styled.on(bg);
        }
        if bold {
            styled = styled.bold();
        }
        styled.to_string()
    }

    fn format_message(&self, character: &Character, message: &Message) -> String {
        match message.role {
            MessageRole::User => format!(
                "  {} {}",
                self.paint("You:", self.palette.input, None, true),
                message.text
            ),
            MessageRole::Ai => format!(
                "  {} {}",
                self.paint(&format!("{}:", character.name), self.palette.name, None, true),
                self.paint(
                    &format!(" {} ", message.text),
                    self.palette.bubble_text,
                    self.palette.bubble_bg,
                    false
                )
            ),
            MessageRole::System => format!("  {}", style(format!("* {}", message.text)).dim().italic()),
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> ChatSurface for TerminalSurface<W> {
    fn render_conversation(&mut self, character: &Character, messages: &[Message]) {
        self.write_line("");
        for message in messages {
            let line = self.format_message(character, message);
            self.write_line(&line);
        }
    }

    fn append_message(&mut self, character: &Character, message: &Message) {
        let line = self.format_message(character, message);
        self.write_line(&line);
    }

    fn show_indicator(&mut self, character: &Character, indicator: Indicator) {
        self.clear_indicator();

        let spinner = if self.spinners {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        let template = ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(template);
        let verb = match indicator {
            Indicator::Thinking => "thinking",
            Indicator::Typing => "typing",
        };
        spinner.set_message(format!("{} is {verb}...", character.name));
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn clear_indicator(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn apply_theme(&mut self, character: &Character) {
        self.palette = TerminalPalette::from_theme(&character.theme);
        let header = format!("── {} · {} ──", character.name, character.tagline);
        let line = format!("  {}", self.paint(&header, self.palette.name, None, true));
        self.write_line("");
        self.write_line(&line);
        let avatar = format!("  {}", style(character.avatar.image(true)).dim());
        self.write_line(&avatar);
    }

    fn reset_input(&mut self) {
        // Readline clears its own line on submit
    }

    fn scroll_to_latest(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::debug!(error = %e, "Failed to flush terminal");
        }
    }
}
