use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://cloudflare-llm.text2team.workers.dev".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_source_lang() -> String {
    "vi".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

fn default_reasoning_open() -> String {
    "<think>".to_string()
}

fn default_reasoning_close() -> String {
    "</think>".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Backend that accepts `{"prompt": ...}` and answers with `{"reply": ...}`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Markers around model reasoning that is stripped from replies
    #[serde(default = "default_reasoning_open")]
    pub reasoning_open: String,
    #[serde(default = "default_reasoning_close")]
    pub reasoning_close: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            endpoint: env::var("DICH_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout_secs: env::var("DICH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            source_lang: env::var("DICH_SOURCE_LANG").unwrap_or(defaults.source_lang),
            target_lang: env::var("DICH_TARGET_LANG").unwrap_or(defaults.target_lang),
            reasoning_open: defaults.reasoning_open,
            reasoning_close: defaults.reasoning_close,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            reasoning_open: default_reasoning_open(),
            reasoning_close: default_reasoning_close(),
        }
    }
}
