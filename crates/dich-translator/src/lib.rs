use std::time::Duration;

mod reply;
mod worker;

pub use reply::extract_reply;
pub use worker::WorkerClient;

/// Translation backend interface
#[async_trait::async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Send one prompt and return the raw reply text. One request per call,
    /// no retries.
    async fn send(&self, prompt: &str) -> Result<String, ClientError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or non-2xx status
    #[error("Network failure: {detail}")]
    NetworkFailure { status: Option<u16>, detail: String },

    /// Body is not JSON or has no reply in a known shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}
