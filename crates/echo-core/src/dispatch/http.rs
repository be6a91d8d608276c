use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::DispatchError;
use crate::state::{ChatRequest, ChatResponse};

/// Wall-clock budget for one chat round trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(70);

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Deserialize)]
struct PingResponse {
    ok: bool,
}

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Issue one `POST /chat`, cancelled if no response arrives in time.
    ///
    /// The deadline owns both the timer and the in-flight request, so every
    /// exit path (reply, error, or expiry) drops them together.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, DispatchError> {
        tracing::debug!(mode = request.mode.as_str(), url = %self.base_url, "dispatching chat request");

        match tokio::time::timeout(self.timeout, self.post_chat(request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "chat request timed out");
                Err(DispatchError::Timeout)
            }
        }
    }

    async fn post_chat(&self, request: &ChatRequest) -> Result<ChatResponse, DispatchError> {
        let url = format!("{}/chat", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DispatchError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Health check against `GET /ping`.
    pub async fn ping(&self) -> Result<bool, DispatchError> {
        tokio::time::timeout(PING_TIMEOUT.min(self.timeout), self.get_ping())
            .await
            .unwrap_or(Err(DispatchError::Timeout))
    }

    async fn get_ping(&self) -> Result<bool, DispatchError> {
        let url = format!("{}/ping", self.base_url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DispatchError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let ping: PingResponse = serde_json::from_str(&body)?;
        Ok(ping.ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ChatClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_default_timeout_is_seventy_seconds() {
        let client = ChatClient::new("http://localhost:8000");
        assert_eq!(client.timeout(), Duration::from_secs(70));
    }
}
