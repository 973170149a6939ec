//! Prompt builder for Parlor characters.
//!
//! Assembles the single prompt string sent to the reply endpoint from the
//! character's persona, its standing question, a bounded window of recent
//! history, fixed behavioral rules, and the visitor's new message.

use parlor_types::character::Character;
use parlor_types::chat::{Message, MessageRole};
use parlor_types::config::{PromptConfig, TranscriptWindow};

/// Placeholder used when there is no prior conversation to show.
pub const EMPTY_TRANSCRIPT: &str = "(no previous conversation)";

/// Label for the visitor's lines in the transcript.
const VISITOR_LABEL: &str = "Visitor";

/// Builds prompts for the reply endpoint.
///
/// Layout:
/// ```text
/// {persona}
///
/// You have already asked the visitor: "{standing question}"
///
/// Recent conversation:
/// Visitor: ...
/// {name}: ...
///
/// Instructions:
/// - ...
///
/// The visitor's new message:
/// """
/// {user text}
/// """
/// ```
///
/// `build` has no side effects: the same character, history, and user text
/// always produce the same string.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    config: PromptConfig,
}

impl PromptBuilder {
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    pub fn window(&self) -> TranscriptWindow {
        self.config.window
    }

    /// Build the prompt for one turn.
    ///
    /// `history` is the conversation as it was before the visitor's new
    /// message was appended.
    pub fn build(&self, character: &Character, history: &[Message], user_text: &str) -> String {
        let mut sections = Vec::with_capacity(5);

        sections.push(character.persona.trim().to_string());

        sections.push(format!(
            "You have already asked the visitor: \"{}\"",
            character.standing_question.trim()
        ));

        let window = self.transcript_window(history);
        let transcript = if window.is_empty() {
            EMPTY_TRANSCRIPT.to_string()
        } else {
            window
                .iter()
                .map(|m| format!("{}: {}", Self::speaker(character, m), m.text))
                .collect::<Vec<_>>()
                .join("\n")
        };
        sections.push(format!("Recent conversation:\n{transcript}"));

        sections.push(self.instructions(character));

        sections.push(format!(
            "The visitor's new message:\n\"\"\"\n{}\n\"\"\"",
            user_text.trim()
        ));

        sections.join("\n\n")
    }

    /// The slice of history that fits the configured window, oldest first.
    ///
    /// System notices never count toward the transcript.
    pub fn transcript_window<'a>(&self, history: &'a [Message]) -> Vec<&'a Message> {
        let spoken = history.iter().filter(|m| m.role != MessageRole::System);

        let mut window: Vec<&Message> = match self.config.window {
            TranscriptWindow::Turns(limit) => spoken.rev().take(limit).collect(),
            TranscriptWindow::Chars(budget) => {
                // Newest first; stop at the first message that would overflow.
                let mut used = 0usize;
                let mut recent = Vec::new();
                for message in spoken.rev() {
                    let len = message.text.chars().count();
                    if used + len > budget {
                        break;
                    }
                    used += len;
                    recent.push(message);
                }
                recent
            }
        };
        window.reverse();
        window
    }

    fn instructions(&self, character: &Character) -> String {
        format!(
            "Instructions:\n\
            - Reply briefly, in one to three short sentences.\n\
            - Stay in character as {} at all times.\n\
            - Occasionally end with a short follow-up question.\n\
            - If the visitor asks about the project \"{}\", answer in exactly one sentence.",
            character.name, self.config.spotlight_project
        )
    }

    fn speaker<'a>(character: &'a Character, message: &Message) -> &'a str {
        match message.role {
            MessageRole::User => VISITOR_LABEL,
            _ => &character.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::default_characters;

    fn builder(window: TranscriptWindow) -> PromptBuilder {
        PromptBuilder::new(PromptConfig {
            window,
            spotlight_project: "Lanternworks".to_string(),
        })
    }

    fn long_history(n: usize) -> Vec<Message> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Message::user(format!("question number {i}"))
                } else {
                    Message::ai(format!("answer number {i}"))
                }
            })
            .collect()
    }

    #[test]
    fn test_build_contains_all_sections() {
        let ada = &default_characters()[0];
        let prompt = builder(TranscriptWindow::Turns(8)).build(ada, &[], "Hello");

        assert!(prompt.starts_with(ada.persona.trim()));
        assert!(prompt.contains(&format!(
            "You have already asked the visitor: \"{}\"",
            ada.standing_question
        )));
        assert!(prompt.contains(EMPTY_TRANSCRIPT));
        assert!(prompt.contains("Stay in character as Ada"));
        assert!(prompt.contains(
            "If the visitor asks about the project \"Lanternworks\", answer in exactly one sentence."
        ));
        assert!(prompt.ends_with("\"\"\"\nHello\n\"\"\""));
    }

    #[test]
    fn test_build_is_pure() {
        let ada = &default_characters()[0];
        let history = long_history(5);
        let b = builder(TranscriptWindow::Chars(200));
        let first = b.build(ada, &history, "Tell me more");
        let second = b.build(ada, &history, "Tell me more");
        assert_eq!(first, second);
    }

    #[test]
    fn test_transcript_labels_speakers() {
        let mo = &default_characters()[2];
        let history = vec![Message::ai("What did you eat?"), Message::user("Dumplings")];
        let prompt = builder(TranscriptWindow::Turns(8)).build(mo, &history, "And you?");
        assert!(prompt.contains("Mo: What did you eat?\nVisitor: Dumplings"));
        assert!(!prompt.contains(EMPTY_TRANSCRIPT));
    }

    #[test]
    fn test_turn_window_never_exceeds_bound() {
        let b = builder(TranscriptWindow::Turns(4));
        for n in [0, 1, 4, 5, 50] {
            let history = long_history(n);
            let window = b.transcript_window(&history);
            assert!(window.len() <= 4);
            assert_eq!(window.len(), n.min(4));
            if n > 0 {
                assert_eq!(window.last().unwrap().text, history[n - 1].text);
            }
        }
    }

    #[test]
    fn test_char_window_never_exceeds_budget() {
        let b = builder(TranscriptWindow::Chars(60));
        for n in [0, 3, 10, 200] {
            let history = long_history(n);
            let window = b.transcript_window(&history);
            let total: usize = window.iter().map(|m| m.text.chars().count()).sum();
            assert!(total <= 60, "n={n} total={total}");
        }
    }

    #[test]
    fn test_char_window_stops_at_first_overflow() {
        let history = vec![
            Message::user("short"),
            Message::ai("x".repeat(50)),
            Message::user("tail"),
        ];
        // "tail" (4) fits, the 50-char message would exceed 20, so scanning stops
        // there even though "short" would still fit.
        let window = builder(TranscriptWindow::Chars(20)).transcript_window(&history);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].text, "tail");
    }

    #[test]
    fn test_window_keeps_chronological_order() {
        let history = long_history(6);
        let window = builder(TranscriptWindow::Turns(3)).transcript_window(&history);
        let texts: Vec<&str> = window.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["answer number 3", "question number 4", "answer number 5"]);
    }

    #[test]
    fn test_system_notices_excluded() {
        let history = vec![
            Message::system("The visitor has entered the chat!"),
            Message::ai("Hello?"),
        ];
        let window = builder(TranscriptWindow::Turns(8)).transcript_window(&history);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].text, "Hello?");
    }

    #[test]
    fn test_user_text_is_trimmed_and_delimited() {
        let pip = &default_characters()[4];
        let prompt = builder(TranscriptWindow::Turns(2)).build(pip, &[], "   gears?  ");
        assert!(prompt.contains("The visitor's new message:\n\"\"\"\ngears?\n\"\"\""));
    }
}
