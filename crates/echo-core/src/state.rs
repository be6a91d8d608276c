//! UI-agnostic wire and transcript types
//!
//! This module contains data structures that are shared between the request
//! dispatcher and whichever front end drives the widget. None of them depend
//! on a specific UI framework.

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// The transformation requested from the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Chat,
    RewriteShorter,
    RewritePoliter,
    RewriteConfident,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Chat => "chat",
            Mode::RewriteShorter => "rewrite_shorter",
            Mode::RewritePoliter => "rewrite_politer",
            Mode::RewriteConfident => "rewrite_confident",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "chat" => Some(Mode::Chat),
            "rewrite_shorter" => Some(Mode::RewriteShorter),
            "rewrite_politer" => Some(Mode::RewritePoliter),
            "rewrite_confident" => Some(Mode::RewriteConfident),
            _ => None,
        }
    }

    pub fn rewrites() -> Vec<Mode> {
        vec![Mode::RewriteShorter, Mode::RewritePoliter, Mode::RewriteConfident]
    }

    pub fn is_rewrite(&self) -> bool {
        !matches!(self, Mode::Chat)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Chat => "Reply",
            Mode::RewriteShorter => "Shorter",
            Mode::RewritePoliter => "Politer",
            Mode::RewriteConfident => "More confident",
        }
    }
}

/// Outbound body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub tone: String,
    pub scenario: String,
    pub mode: Mode,
}

/// Inbound body of a successful `POST /chat`
///
/// `options` is kept as raw JSON so a malformed list never fails the whole
/// reply; the transcript filters it when rendering chips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_mode_in_snake_case() {
        let request = ChatRequest {
            message: "Can we move the meeting?".to_string(),
            tone: "Calm".to_string(),
            scenario: "work".to_string(),
            mode: Mode::RewritePoliter,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Can we move the meeting?",
                "tone": "Calm",
                "scenario": "work",
                "mode": "rewrite_politer",
            })
        );
    }

    #[test]
    fn test_response_without_options() {
        let response: ChatResponse = serde_json::from_str(r#"{"reply":"Sure, works for me."}"#).unwrap();
        assert_eq!(response.reply, "Sure, works for me.");
        assert!(response.options.is_none());
    }

    #[test]
    fn test_response_keeps_non_array_options() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"reply":"ok","options":"not a list"}"#).unwrap();
        assert_eq!(response.options, Some(json!("not a list")));
    }

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in [Mode::Chat, Mode::RewriteShorter, Mode::RewritePoliter, Mode::RewriteConfident] {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::from_str("rewrite_louder"), None);
    }
}
