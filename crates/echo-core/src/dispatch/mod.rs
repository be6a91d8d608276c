pub mod error;
pub mod http;
pub mod mock;

pub use error::DispatchError;
pub use http::{ChatClient, DEFAULT_TIMEOUT};
pub use mock::MockBackend;

use crate::state::{ChatRequest, ChatResponse};

/// Where chat requests go: the real `/chat` endpoint or the canned mock.
#[derive(Clone)]
pub enum Backend {
    Http(ChatClient),
    Mock(MockBackend),
}

impl Backend {
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, DispatchError> {
        match self {
            Backend::Http(client) => client.send(request).await,
            Backend::Mock(mock) => mock.send(request).await,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Backend::Http(client) => client.base_url().to_string(),
            Backend::Mock(_) => "mock".to_string(),
        }
    }
}
