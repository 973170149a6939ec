use thiserror::Error;

/// Errors from the reply endpoint.
///
/// None of these are fatal to a chat session: the manager turns each one
/// into an `ai` message and the conversation continues.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("endpoint returned {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors related to configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid probability for {field}: {value} (expected 0.0..=1.0)")]
    InvalidProbability { field: &'static str, value: f64 },

    #[error("invalid range for {field}: {min} > {max}")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Errors related to character selection.
#[derive(Debug, Error)]
pub enum CharacterError {
    #[error("no character matches '{0}'")]
    NotFound(String),

    #[error("character roster is empty")]
    EmptyRoster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_status_display() {
        let err = ReplyError::Status {
            code: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "endpoint returned 500 Internal Server Error");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidRange {
            field: "delivery.cps",
            min: 30.0,
            max: 10.0,
        };
        assert!(err.to_string().contains("delivery.cps"));
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_character_error_display() {
        let err = CharacterError::NotFound("zed".to_string());
        assert_eq!(err.to_string(), "no character matches 'zed'");
    }
}
