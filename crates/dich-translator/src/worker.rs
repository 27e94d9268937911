use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::reply::extract_reply;
use crate::{ClientError, ProviderMetadata, TranslationBackend};

/// HTTP worker that forwards a prompt to a hosted model
#[derive(Clone)]
pub struct WorkerClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
}

impl WorkerClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    fn classify(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            return ClientError::Timeout(self.timeout);
        }

        ClientError::NetworkFailure {
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }
}

#[async_trait]
impl TranslationBackend for WorkerClient {
    async fn send(&self, prompt: &str) -> Result<String, ClientError> {
        debug!(endpoint = %self.endpoint, chars = prompt.chars().count(), "Sending prompt");

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&PromptRequest { prompt })
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Translation backend returned an error");
            return Err(ClientError::NetworkFailure {
                status: Some(status.as_u16()),
                detail: format!("HTTP {status}: {body}"),
            });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        debug!(bytes = body.len(), "Received reply");

        extract_reply(&body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Cloudflare Worker".to_string(),
            endpoint: self.endpoint.clone(),
        }
    }
}
