//! Global configuration types for Parlor.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! reply endpoint, prompt assembly, reply pacing, and fallback texts.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for the Parlor chat client.
///
/// Loaded from `~/.parlor/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub delivery: DeliveryConfig,

    #[serde(default)]
    pub placeholders: Placeholders,

    /// Fixed seed for the pacing random source. Unset means seeded from entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GlobalConfig {
    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prompt.validate()?;
        self.delivery.validate()
    }
}

/// Where replies come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_endpoint_url")]
    pub url: String,

    /// Request timeout in seconds. Unset leaves the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:3000/submit".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            request_timeout_secs: None,
        }
    }
}

/// How much recent history goes into each prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptWindow {
    /// The most recent N messages.
    Turns(usize),
    /// The most recent messages whose combined text fits in this many chars.
    Chars(usize),
}

impl Default for TranscriptWindow {
    fn default() -> Self {
        TranscriptWindow::Turns(8)
    }
}

/// Prompt assembly settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub window: TranscriptWindow,

    /// Project name that triggers the one-sentence answer rule.
    #[serde(default = "default_spotlight_project")]
    pub spotlight_project: String,
}

fn default_spotlight_project() -> String {
    "Lanternworks".to_string()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            window: TranscriptWindow::default(),
            spotlight_project: default_spotlight_project(),
        }
    }
}

impl PromptConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.spotlight_project.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "prompt.spotlight_project",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Human-paced reply delivery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Chance of a filler utterance before the reply.
    #[serde(default = "default_backchannel_chance")]
    pub backchannel_chance: f64,

    /// Chance of splitting a reply into several bubbles.
    #[serde(default = "default_split_chance")]
    pub split_chance: f64,

    #[serde(default = "default_max_bubbles")]
    pub max_bubbles: usize,

    /// Typing speed range in characters per second.
    #[serde(default = "default_cps_min")]
    pub cps_min: f64,
    #[serde(default = "default_cps_max")]
    pub cps_max: f64,

    /// Floor for a single typing delay.
    #[serde(default = "default_min_typing_ms")]
    pub min_typing_ms: u64,

    /// Pause range between bubbles.
    #[serde(default = "default_pause_min_ms")]
    pub pause_min_ms: u64,
    #[serde(default = "default_pause_max_ms")]
    pub pause_max_ms: u64,

    #[serde(default = "default_backchannels")]
    pub backchannels: Vec<String>,
}

fn default_backchannel_chance() -> f64 {
    0.15
}

fn default_split_chance() -> f64 {
    0.6
}

fn default_max_bubbles() -> usize {
    3
}

fn default_cps_min() -> f64 {
    18.0
}

fn default_cps_max() -> f64 {
    32.0
}

fn default_min_typing_ms() -> u64 {
    500
}

fn default_pause_min_ms() -> u64 {
    250
}

fn default_pause_max_ms() -> u64 {
    800
}

fn default_backchannels() -> Vec<String> {
    ["Okay…", "Hmm…", "Right…", "I see…", "Oh!"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            backchannel_chance: default_backchannel_chance(),
            split_chance: default_split_chance(),
            max_bubbles: default_max_bubbles(),
            cps_min: default_cps_min(),
            cps_max: default_cps_max(),
            min_typing_ms: default_min_typing_ms(),
            pause_min_ms: default_pause_min_ms(),
            pause_max_ms: default_pause_max_ms(),
            backchannels: default_backchannels(),
        }
    }
}

impl DeliveryConfig {
    /// Delivery with no filler, no splitting, no typing floor, and no pauses.
    ///
    /// Typing time still scales with reply length at the default speed.
    pub fn instant() -> Self {
        Self {
            backchannel_chance: 0.0,
            split_chance: 0.0,
            min_typing_ms: 0,
            pause_min_ms: 0,
            pause_max_ms: 0,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_probability("delivery.backchannel_chance", self.backchannel_chance)?;
        check_probability("delivery.split_chance", self.split_chance)?;

        if self.max_bubbles == 0 {
            return Err(ConfigError::InvalidValue {
                field: "delivery.max_bubbles",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.cps_min.is_finite() || self.cps_min <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "delivery.cps_min",
                reason: "must be a positive finite number".to_string(),
            });
        }
        if !self.cps_max.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "delivery.cps_max",
                reason: "must be a finite number".to_string(),
            });
        }
        if self.cps_min > self.cps_max {
            return Err(ConfigError::InvalidRange {
                field: "delivery.cps",
                min: self.cps_min,
                max: self.cps_max,
            });
        }
        if self.pause_min_ms > self.pause_max_ms {
            return Err(ConfigError::InvalidRange {
                field: "delivery.pause_ms",
                min: self.pause_min_ms as f64,
                max: self.pause_max_ms as f64,
            });
        }
        Ok(())
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { field, value })
    }
}

/// Fixed texts shown in place of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    /// Shown when the endpoint answers with a blank reply.
    #[serde(default = "default_empty_reply")]
    pub empty_reply: String,

    /// Shown when the endpoint cannot be reached or its body cannot be read.
    #[serde(default = "default_failure")]
    pub failure: String,
}

fn default_empty_reply() -> String {
    "(Empty AI response)".to_string()
}

fn default_failure() -> String {
    "Oops, something went wrong. Let's try again!".to_string()
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            empty_reply: default_empty_reply(),
            failure: default_failure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.endpoint.url, "http://127.0.0.1:3000/submit");
        assert_eq!(config.prompt.window, TranscriptWindow::Turns(8));
        assert_eq!(config.placeholders.empty_reply, "(Empty AI response)");
        assert_eq!(config.delivery.max_bubbles, 3);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
seed = 42

[endpoint]
url = "https://chat.example.com/submit"
request_timeout_secs = 20

[prompt]
window = { chars = 1200 }
spotlight_project = "Northwind"

[delivery]
backchannel_chance = 0.0
max_bubbles = 2
backchannels = ["Mm-hm…"]
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.endpoint.url, "https://chat.example.com/submit");
        assert_eq!(config.endpoint.request_timeout_secs, Some(20));
        assert_eq!(config.prompt.window, TranscriptWindow::Chars(1200));
        assert_eq!(config.prompt.spotlight_project, "Northwind");
        assert_eq!(config.delivery.max_bubbles, 2);
        assert_eq!(config.delivery.backchannels, vec!["Mm-hm…".to_string()]);
        // Untouched fields keep their defaults
        assert!((config.delivery.split_chance - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_bad_probability() {
        let mut config = GlobalConfig::default();
        config.delivery.split_chance = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { field: "delivery.split_chance", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let mut config = GlobalConfig::default();
        config.delivery.cps_min = 40.0;
        config.delivery.cps_max = 10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { field: "delivery.cps", .. })
        ));

        let mut config = GlobalConfig::default();
        config.delivery.pause_min_ms = 900;
        config.delivery.pause_max_ms = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_typing_speed() {
        for toml_str in [
            "[delivery]\ncps_max = nan\n",
            "[delivery]\ncps_max = inf\n",
            "[delivery]\ncps_min = nan\n",
            "[delivery]\ncps_min = -inf\n",
        ] {
            let config: GlobalConfig = toml::from_str(toml_str).unwrap();
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidValue { .. })),
                "accepted {toml_str:?}"
            );
        }
    }

    #[test]
    fn test_validate_rejects_zero_bubbles() {
        let mut config = GlobalConfig::default();
        config.delivery.max_bubbles = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_instant_delivery_is_valid() {
        let delivery = DeliveryConfig::instant();
        assert_eq!(delivery.backchannel_chance, 0.0);
        assert_eq!(delivery.min_typing_ms, 0);
        assert!(delivery.validate().is_ok());
    }
}
