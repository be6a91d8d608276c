use std::time::Duration;

use serde_json::json;

use super::DispatchError;
use crate::state::{ChatRequest, ChatResponse};

const MOCK_REPLY: &str = "Just following up — let me know when you have a moment.";
const MOCK_OPTIONS: [&str; 3] = [
    "Checking in — feel free to reply when you’re free.",
    "Just wanted to check in.",
    "Let me know when you get a chance.",
];

/// Offline stand-in for the `/chat` endpoint. Always answers with the same
/// follow-up reply and three options, whatever the mode.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    latency: Duration,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay each reply, handy for watching the sending state.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, DispatchError> {
        tracing::debug!(mode = request.mode.as_str(), "mock backend answering");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        Ok(ChatResponse {
            reply: MOCK_REPLY.to_string(),
            options: Some(json!(MOCK_OPTIONS)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;
    use crate::transcript::DraftOptions;

    #[tokio::test]
    async fn test_mock_returns_canned_reply_and_three_options() {
        let request = ChatRequest {
            message: "Are you coming tonight?".to_string(),
            tone: "Calm".to_string(),
            scenario: "friend".to_string(),
            mode: Mode::Chat,
        };
        let response = MockBackend::new().send(&request).await.unwrap();
        assert_eq!(response.reply, MOCK_REPLY);
        let options = DraftOptions::extract(response.options.as_ref().unwrap());
        assert_eq!(options.len(), 3);
    }
}
