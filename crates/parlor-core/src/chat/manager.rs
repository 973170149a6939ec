//! Chat session manager.
//!
//! Translates picker and submit events into prompt construction, reply
//! fetches, and rendered output, while keeping every character's
//! conversation consistent with the one currently on screen.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, info_span, Instrument};

use parlor_types::chat::Message;
use parlor_types::config::{GlobalConfig, Placeholders};
use parlor_types::error::ReplyError;

use crate::delivery::{Beat, DeliveryPlanner, Pacer};
use crate::prompt::PromptBuilder;
use crate::reply::{resolve_reply, ReplyFetcher, ResolvedReply};
use crate::surface::{ChatSurface, Indicator};

use super::session::{SessionState, TurnPhase};

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// A reply is still pending; nothing happened.
    Busy,
    /// The reply was delivered as this many `ai` messages.
    Replied { bubbles: usize },
    /// The endpoint failed; a single `ai` notice was recorded.
    Failed { notice: String },
}

/// Why `begin_turn` refused a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRejected {
    Empty,
    Busy,
}

/// A submitted turn waiting for its reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTurn {
    character: usize,
    prompt: String,
}

impl PendingTurn {
    /// Roster index of the character the visitor was talking to.
    pub fn character(&self) -> usize {
        self.character
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// Owns the session state and drives every chat interaction.
///
/// Generic over the reply backend, the clock used for pacing, and the random
/// source, so tests can run with a fake endpoint, no real delays, and a
/// seeded rng.
pub struct ChatSessionManager<F, P, R = StdRng> {
    state: SessionState,
    fetcher: F,
    pacer: P,
    rng: R,
    prompts: PromptBuilder,
    planner: DeliveryPlanner,
    placeholders: Placeholders,
}

impl<F, P, R> ChatSessionManager<F, P, R>
where
    F: ReplyFetcher,
    P: Pacer,
    R: Rng,
{
    pub fn new(state: SessionState, fetcher: F, pacer: P, rng: R, config: &GlobalConfig) -> Self {
        Self {
            state,
            fetcher,
            pacer,
            rng,
            prompts: PromptBuilder::new(config.prompt.clone()),
            planner: DeliveryPlanner::new(config.delivery.clone()),
            placeholders: config.placeholders.clone(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    /// Switch to the character at `index`.
    ///
    /// Seeds an empty conversation with the standing question, applies the
    /// theme, and redraws the full conversation. Out-of-range indices are
    /// ignored and return `false`.
    pub fn select_character<S: ChatSurface>(&mut self, index: usize, surface: &mut S) -> bool {
        let Some(seeded) = self.state.select(index) else {
            debug!(index, "Ignoring out-of-range character index");
            return false;
        };

        let character = self.state.current_character();
        info!(character = %character.slug, seeded, "Character selected");

        surface.apply_theme(character);
        surface.render_conversation(character, self.state.current_conversation().messages());
        surface.scroll_to_latest();
        true
    }

    /// Show a system notice on the surface without recording it.
    pub fn show_notice<S: ChatSurface>(&self, text: &str, surface: &mut S) {
        let character = self.state.current_character();
        surface.append_message(character, &Message::system(text));
        surface.scroll_to_latest();
    }

    /// Submit the visitor's input and deliver the reply.
    ///
    /// Runs `begin_turn`, the reply fetch, and `finish_turn` in sequence.
    pub async fn submit_user_message<S: ChatSurface>(
        &mut self,
        text: &str,
        surface: &mut S,
    ) -> TurnOutcome {
        let turn = match self.begin_turn(text, surface) {
            Ok(turn) => turn,
            Err(TurnRejected::Empty) => return TurnOutcome::Ignored,
            Err(TurnRejected::Busy) => return TurnOutcome::Busy,
        };

        let span = info_span!(
            "reply.fetch",
            fetcher = self.fetcher.name(),
            character = %self.state.characters()[turn.character].slug,
            prompt_chars = turn.prompt.len(),
        );
        let result = self.fetcher.fetch(&turn.prompt).instrument(span).await;

        self.finish_turn(turn, result, surface).await
    }

    /// First half of a turn: record and render the visitor's message, clear
    /// the input, build the prompt, and show the thinking indicator.
    ///
    /// Refused while any reply is still pending.
    pub fn begin_turn<S: ChatSurface>(
        &mut self,
        text: &str,
        surface: &mut S,
    ) -> Result<PendingTurn, TurnRejected> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TurnRejected::Empty);
        }

        let index = self.state.current_index();
        if self.state.phase(index) == Some(TurnPhase::Unseeded) {
            self.select_character(index, surface);
        }

        if !self.state.begin_awaiting() {
            debug!(
                pending = ?self.state.pending_character(),
                "Submission rejected while a reply is pending"
            );
            return Err(TurnRejected::Busy);
        }

        let message = Message::user(text);
        self.state.push_message(index, message.clone());

        let character = self.state.current_character();
        surface.append_message(character, &message);
        surface.scroll_to_latest();
        surface.reset_input();

        let messages = self.state.current_conversation().messages();
        let history = &messages[..messages.len() - 1];
        let prompt = self.prompts.build(character, history, text);
        debug!(
            character = %character.slug,
            history = history.len(),
            window = ?self.prompts.window(),
            prompt_chars = prompt.len(),
            "Prompt assembled"
        );

        surface.show_indicator(character, Indicator::Thinking);
        surface.scroll_to_latest();

        Ok(PendingTurn {
            character: index,
            prompt,
        })
    }

    /// Second half of a turn: clear the thinking indicator and deliver the
    /// reply, or record an error notice.
    ///
    /// Messages always land in the conversation the turn started in, even if
    /// the visitor switched characters in the meantime.
    pub async fn finish_turn<S: ChatSurface>(
        &mut self,
        turn: PendingTurn,
        result: Result<String, ReplyError>,
        surface: &mut S,
    ) -> TurnOutcome {
        let index = turn.character;
        surface.clear_indicator();

        let outcome = match resolve_reply(result, &self.placeholders) {
            ResolvedReply::Reply(text) => {
                let bubbles = self.deliver(index, &text, surface).await;
                TurnOutcome::Replied { bubbles }
            }
            ResolvedReply::Notice(notice) => {
                self.record_ai(index, Message::ai(notice.clone()), surface);
                TurnOutcome::Failed { notice }
            }
        };

        self.state.finish_awaiting(index);
        info!(
            character = %self.state.characters()[index].slug,
            outcome = ?outcome,
            "Turn completed"
        );
        outcome
    }

    /// Play a reply with human pacing. Returns the number of bubbles recorded.
    async fn deliver<S: ChatSurface>(&mut self, index: usize, text: &str, surface: &mut S) -> usize {
        let plan = self.planner.plan(text, &mut self.rng);
        debug!(
            bubbles = plan.bubbles.len(),
            backchannel = plan.backchannel.is_some(),
            total_ms = plan.total_duration().as_millis() as u64,
            "Delivery planned"
        );

        if let Some(filler) = plan.backchannel {
            self.play_beat(index, filler, false, surface).await;
        }

        let count = plan.bubbles.len();
        for bubble in plan.bubbles {
            self.play_beat(index, bubble, true, surface).await;
        }
        count
    }

    /// Typing indicator, delay, then the text. Backchannel fillers are shown
    /// but not recorded in the conversation.
    async fn play_beat<S: ChatSurface>(
        &mut self,
        index: usize,
        beat: Beat,
        record: bool,
        surface: &mut S,
    ) {
        let visible = self.state.current_index() == index;

        if visible {
            surface.show_indicator(self.state.current_character(), Indicator::Typing);
            surface.scroll_to_latest();
            self.pacer.pause(beat.typing).await;
            surface.clear_indicator();
        }

        let message = Message::ai(beat.text);
        if record {
            self.record_ai(index, message, surface);
        } else if visible {
            surface.append_message(self.state.current_character(), &message);
            surface.scroll_to_latest();
        }

        if visible && !beat.pause_after.is_zero() {
            self.pacer.pause(beat.pause_after).await;
        }
    }

    fn record_ai<S: ChatSurface>(&mut self, index: usize, message: Message, surface: &mut S) {
        self.state.push_message(index, message.clone());
        if self.state.current_index() == index {
            surface.append_message(self.state.current_character(), &message);
            surface.scroll_to_latest();
        }
    }
}
