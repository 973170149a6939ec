//! Human-paced reply delivery.
//!
//! A reply is turned into a `DeliveryPlan`: an optional backchannel filler
//! followed by one or more bubbles, each with a typing delay and a pause.
//! Planning is pure given a random source, so a seeded `StdRng` makes the
//! whole pacing sequence reproducible. The manager executes the plan against
//! a `ChatSurface` and a `Pacer`.

use std::future::Future;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use parlor_types::config::DeliveryConfig;

/// Clock used for typing delays and pauses.
///
/// Uses native async fn in traits (RPITIT). Implementations live in
/// parlor-infra (e.g., `TokioPacer`).
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// One rendered unit of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beat {
    pub text: String,
    /// How long the typing indicator stays up before the text appears.
    pub typing: Duration,
    /// Pause after the text appears, before the next beat starts.
    pub pause_after: Duration,
}

/// The full pacing sequence for one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPlan {
    pub backchannel: Option<Beat>,
    pub bubbles: Vec<Beat>,
}

impl DeliveryPlan {
    /// Bubble texts in order.
    pub fn bubble_texts(&self) -> Vec<&str> {
        self.bubbles.iter().map(|b| b.text.as_str()).collect()
    }

    /// Sum of every delay in the plan.
    pub fn total_duration(&self) -> Duration {
        self.backchannel
            .iter()
            .chain(self.bubbles.iter())
            .map(|b| b.typing + b.pause_after)
            .sum()
    }
}

/// Plans human-like delivery for replies.
#[derive(Debug, Clone)]
pub struct DeliveryPlanner {
    config: DeliveryConfig,
}

impl DeliveryPlanner {
    pub fn new(config: DeliveryConfig) -> Self {
        Self { config }
    }

    /// Plan delivery of `reply`.
    ///
    /// Draws, in order: the backchannel roll, the split roll, then one typing
    /// speed and one pause per beat.
    pub fn plan<R: Rng + ?Sized>(&self, reply: &str, rng: &mut R) -> DeliveryPlan {
        let reply = reply.trim();

        let backchannel = if rng.gen_bool(self.config.backchannel_chance) {
            self.config
                .backchannels
                .choose(rng)
                .cloned()
                .map(|text| self.beat(text, true, rng))
        } else {
            None
        };

        let mut texts = if rng.gen_bool(self.config.split_chance) {
            cap_bubbles(split_sentences(reply), self.config.max_bubbles)
        } else {
            Vec::new()
        };
        if texts.is_empty() {
            texts.push(reply.to_string());
        }

        let last = texts.len().saturating_sub(1);
        let bubbles = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| self.beat(text, i < last, rng))
            .collect();

        DeliveryPlan {
            backchannel,
            bubbles,
        }
    }

    /// Typing delay for `text`: its length over a random typing speed,
    /// never shorter than the configured floor.
    pub fn typing_delay<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Duration {
        let chars = text.chars().count() as f64;
        let cps = rng.gen_range(self.config.cps_min..=self.config.cps_max);
        let ms = (chars / cps * 1000.0).round() as u64;
        Duration::from_millis(ms.max(self.config.min_typing_ms))
    }

    fn beat<R: Rng + ?Sized>(&self, text: String, pause: bool, rng: &mut R) -> Beat {
        let typing = self.typing_delay(&text, rng);
        let pause_after = if pause {
            Duration::from_millis(
                rng.gen_range(self.config.pause_min_ms..=self.config.pause_max_ms),
            )
        } else {
            Duration::ZERO
        };
        Beat {
            text,
            typing,
            pause_after,
        }
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// Split text at sentence boundaries: sentence-ending punctuation followed
/// by whitespace. The punctuation stays with its sentence and the whitespace
/// is dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_sentence_end(c) {
            continue;
        }
        let end = i + c.len_utf8();
        if matches!(chars.peek(), Some((_, next)) if next.is_whitespace()) {
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            while matches!(chars.peek(), Some((_, next)) if next.is_whitespace()) {
                chars.next();
            }
            start = chars.peek().map(|(j, _)| *j).unwrap_or(text.len());
        }
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

/// Limit the bubble count, folding overflow sentences into the last bubble
/// so no text is dropped.
pub fn cap_bubbles(mut sentences: Vec<String>, max_bubbles: usize) -> Vec<String> {
    let max_bubbles = max_bubbles.max(1);
    if sentences.len() <= max_bubbles {
        return sentences;
    }
    let tail = sentences.split_off(max_bubbles - 1).join(" ");
    sentences.push(tail);
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> DeliveryConfig {
        DeliveryConfig {
            backchannel_chance: 0.0,
            split_chance: 1.0,
            max_bubbles: 3,
            cps_min: 20.0,
            cps_max: 20.0,
            min_typing_ms: 300,
            pause_min_ms: 100,
            pause_max_ms: 100,
            backchannels: vec!["Okay…".to_string()],
        }
    }

    #[test]
    fn test_split_sentences_basic() {
        assert_eq!(
            split_sentences("Hi there! How are you? I'm fine."),
            vec!["Hi there!", "How are you?", "I'm fine."]
        );
    }

    #[test]
    fn test_split_requires_whitespace_after_punctuation() {
        assert_eq!(split_sentences("Version 2.5 is out."), vec!["Version 2.5 is out."]);
        assert_eq!(split_sentences("Wait?! Really."), vec!["Wait?!", "Really."]);
        assert_eq!(split_sentences("Well…  maybe"), vec!["Well…", "maybe"]);
    }

    #[test]
    fn test_split_single_sentence_and_empty() {
        assert_eq!(split_sentences("Hi there!"), vec!["Hi there!"]);
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_cap_bubbles_merges_tail() {
        let sentences: Vec<String> = ["A.", "B.", "C.", "D."].iter().map(|s| s.to_string()).collect();
        assert_eq!(cap_bubbles(sentences.clone(), 2), vec!["A.", "B. C. D."]);
        assert_eq!(cap_bubbles(sentences.clone(), 4), sentences);
        assert_eq!(cap_bubbles(sentences, 0), vec!["A. B. C. D."]);
    }

    #[test]
    fn test_plan_bubbles_reconstruct_reply() {
        let planner = DeliveryPlanner::new(config());
        let mut rng = StdRng::seed_from_u64(7);
        let reply = "One. Two! Three? Four.";
        let plan = planner.plan(reply, &mut rng);
        assert_eq!(plan.bubbles.len(), 3);
        assert_eq!(plan.bubble_texts().join(" "), reply);
    }

    #[test]
    fn test_plan_without_split_is_single_bubble() {
        let mut cfg = config();
        cfg.split_chance = 0.0;
        let planner = DeliveryPlanner::new(cfg);
        let plan = planner.plan("One. Two.", &mut StdRng::seed_from_u64(1));
        assert_eq!(plan.bubble_texts(), vec!["One. Two."]);
        assert_eq!(plan.bubbles[0].pause_after, Duration::ZERO);
    }

    #[test]
    fn test_typing_delay_scales_with_length() {
        let planner = DeliveryPlanner::new(config());
        let mut rng = StdRng::seed_from_u64(3);
        // 40 chars at 20 cps = 2s
        assert_eq!(
            planner.typing_delay(&"x".repeat(40), &mut rng),
            Duration::from_millis(2000)
        );
        // 2 chars at 20 cps = 100ms, clamped to the 300ms floor
        assert_eq!(planner.typing_delay("hi", &mut rng), Duration::from_millis(300));
    }

    #[test]
    fn test_pauses_only_between_bubbles() {
        let planner = DeliveryPlanner::new(config());
        let plan = planner.plan("A. B. C.", &mut StdRng::seed_from_u64(11));
        let pauses: Vec<Duration> = plan.bubbles.iter().map(|b| b.pause_after).collect();
        assert_eq!(
            pauses,
            vec![Duration::from_millis(100), Duration::from_millis(100), Duration::ZERO]
        );
    }

    #[test]
    fn test_backchannel_always_when_certain() {
        let mut cfg = config();
        cfg.backchannel_chance = 1.0;
        let planner = DeliveryPlanner::new(cfg);
        let plan = planner.plan("Sure.", &mut StdRng::seed_from_u64(5));
        let filler = plan.backchannel.expect("backchannel");
        assert_eq!(filler.text, "Okay…");
        assert_eq!(filler.pause_after, Duration::from_millis(100));
    }

    #[test]
    fn test_backchannel_skipped_without_fillers() {
        let mut cfg = config();
        cfg.backchannel_chance = 1.0;
        cfg.backchannels.clear();
        let plan = DeliveryPlanner::new(cfg).plan("Sure.", &mut StdRng::seed_from_u64(5));
        assert!(plan.backchannel.is_none());
    }

    #[test]
    fn test_same_seed_same_plan() {
        let planner = DeliveryPlanner::new(DeliveryConfig::default());
        let reply = "The stars were bright. We flew all night! Did you see them?";
        let a = planner.plan(reply, &mut StdRng::seed_from_u64(99));
        let b = planner.plan(reply, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
        assert!(a.total_duration() > Duration::ZERO);
    }
}
