//! Character persona types for Parlor.
//!
//! A `Character` is one of the fixed personas a visitor can talk to. Each one
//! carries its persona instructions, the standing question it is scripted to
//! have already asked, and the theme palette applied when it is selected.

use serde::{Deserialize, Serialize};

use std::fmt;

/// A scripted persona backed by the remote reply endpoint.
///
/// Immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// URL-safe slug used to pick the character from the command line.
    pub slug: String,
    /// Display name shown above the message list.
    pub name: String,
    /// One-line description for the character picker.
    pub tagline: String,
    /// Persona instruction text placed at the top of every prompt.
    pub persona: String,
    /// The question this character is understood to have already asked.
    pub standing_question: String,
    /// Colors applied when this character is active.
    pub theme: ThemePalette,
    pub avatar: Avatar,
}

/// Avatar image references for the character picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    /// Image shown while the character is not selected.
    pub default_image: String,
    /// Image shown while the character is the active one.
    pub selected_image: String,
}

impl Avatar {
    /// The image reference to show for the given selection state.
    pub fn image(&self, selected: bool) -> &str {
        if selected {
            &self.selected_image
        } else {
            &self.default_image
        }
    }
}

/// The visual custom properties set when a character is selected.
///
/// All colors are `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub bubble_background: String,
    pub bubble_text: String,
    pub input_box: String,
    pub name_label: String,
}

impl ThemePalette {
    /// Custom property names paired with their values, in a fixed order.
    pub fn theme_variables(&self) -> [(&'static str, &str); 4] {
        [
            ("--bubble-bg", self.bubble_background.as_str()),
            ("--bubble-text", self.bubble_text.as_str()),
            ("--input-bg", self.input_box.as_str()),
            ("--name-color", self.name_label.as_str()),
        ]
    }
}

/// Parse a `#rrggbb` color into its components.
///
/// Returns `None` for anything that is not exactly six hex digits after `#`.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
