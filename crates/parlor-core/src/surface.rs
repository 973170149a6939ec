//! Rendering surface port.
//!
//! The chat manager never draws anything itself. Every visible change goes
//! through a `ChatSurface`, so the same session logic can drive a terminal,
//! a web view, or a recording double in tests.

use parlor_types::character::Character;
use parlor_types::chat::Message;

/// Transient status shown below the last message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Waiting on the reply endpoint.
    Thinking,
    /// A bubble is being "typed".
    Typing,
}

/// A target the chat manager renders into.
pub trait ChatSurface {
    /// Redraw the whole message list from scratch.
    fn render_conversation(&mut self, character: &Character, messages: &[Message]);

    /// Append one message to the bottom of the list.
    fn append_message(&mut self, character: &Character, message: &Message);

    fn show_indicator(&mut self, character: &Character, indicator: Indicator);

    fn clear_indicator(&mut self);

    /// Apply the character's theme palette, name, and avatar.
    fn apply_theme(&mut self, character: &Character);

    /// Clear the input control and give it focus again.
    fn reset_input(&mut self);

    /// Bring the newest message into view.
    fn scroll_to_latest(&mut self);
}
