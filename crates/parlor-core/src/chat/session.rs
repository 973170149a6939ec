//! Session state for a chat page.
//!
//! `SessionState` owns every character's conversation, the current
//! selection, and the per-character turn phase. It lives for the whole
//! process and is only reset by restarting.

use parlor_types::character::{Character, ThemePalette};
use parlor_types::chat::Message;
use parlor_types::error::CharacterError;

use super::conversation::Conversation;

/// Where a character's conversation is in its turn cycle.
///
/// Unseeded -> Idle on first view, Idle -> AwaitingReply on submit,
/// AwaitingReply -> Idle once the reply (or error notice) is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Unseeded,
    Idle,
    AwaitingReply,
}

/// Process-wide chat state: roster, conversations, and selection.
#[derive(Debug, Clone)]
pub struct SessionState {
    characters: Vec<Character>,
    conversations: Vec<Conversation>,
    phases: Vec<TurnPhase>,
    current: usize,
    /// Character whose reply is in flight, if any.
    pending: Option<usize>,
    turns_completed: u32,
}

impl SessionState {
    /// Create a session over a fixed roster. Character 0 starts selected.
    pub fn new(characters: Vec<Character>) -> Result<Self, CharacterError> {
        if characters.is_empty() {
            return Err(CharacterError::EmptyRoster);
        }
        let count = characters.len();
        Ok(Self {
            characters,
            conversations: vec![Conversation::new(); count],
            phases: vec![TurnPhase::Unseeded; count],
            current: 0,
            pending: None,
            turns_completed: 0,
        })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_character(&self) -> &Character {
        &self.characters[self.current]
    }

    /// Theme of the selected character.
    pub fn active_theme(&self) -> &ThemePalette {
        &self.current_character().theme
    }

    pub fn conversation(&self, index: usize) -> Option<&Conversation> {
        self.conversations.get(index)
    }

    pub fn current_conversation(&self) -> &Conversation {
        &self.conversations[self.current]
    }

    pub fn phase(&self, index: usize) -> Option<TurnPhase> {
        self.phases.get(index).copied()
    }

    /// Whether any character has a reply in flight.
    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_character(&self) -> Option<usize> {
        self.pending
    }

    pub fn turns_completed(&self) -> u32 {
        self.turns_completed
    }

    /// Make `index` the current character, seeding its conversation on first view.
    ///
    /// Returns `None` for an out-of-range index (no change), otherwise
    /// whether the seed message was added.
    pub fn select(&mut self, index: usize) -> Option<bool> {
        if index >= self.characters.len() {
            return None;
        }
        self.current = index;

        let question = self.characters[index].standing_question.clone();
        let seeded = self.conversations[index].seed_if_empty(&question);
        if self.phases[index] == TurnPhase::Unseeded {
            self.phases[index] = TurnPhase::Idle;
        }
        Some(seeded)
    }

    /// Append a message to a character's conversation.
    pub fn push_message(&mut self, index: usize, message: Message) {
        if let Some(conv) = self.conversations.get_mut(index) {
            conv.push(message);
        }
    }

    /// Mark the current character as waiting for a reply.
    ///
    /// Returns `false` if a reply is already pending anywhere in the session.
    pub fn begin_awaiting(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(self.current);
        self.phases[self.current] = TurnPhase::AwaitingReply;
        true
    }

    /// Return a character to idle after its reply was delivered.
    pub fn finish_awaiting(&mut self, index: usize) {
        if self.pending == Some(index) {
            self.pending = None;
            self.turns_completed += 1;
        }
        if let Some(phase) = self.phases.get_mut(index) {
            *phase = TurnPhase::Idle;
        }
    }
}
