use thiserror::Error;

/// Why a chat request produced no reply
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The deadline fired before a response arrived
    #[error("request timed out")]
    Timeout,

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The background task ended without producing a result
    #[error("request interrupted: {0}")]
    Interrupted(String),
}

impl DispatchError {
    /// Text shown to the user as a bot message
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::Timeout => "Request timed out. Please try again.".to_string(),
            DispatchError::Server { status, body } => {
                format!("Error: server responded with {}: {}", status, body)
            }
            other => format!("Error: {}", other),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, DispatchError::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_is_friendly() {
        let msg = DispatchError::Timeout.user_message();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("try again"));
    }

    #[test]
    fn test_server_message_carries_status_and_body() {
        let err = DispatchError::Server {
            status: 502,
            body: "upstream unavailable".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream unavailable"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_decode_error_surfaces_raw_message() {
        let raw = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = raw.to_string();
        let msg = DispatchError::from(raw).user_message();
        assert!(msg.contains(&expected));
    }
}
