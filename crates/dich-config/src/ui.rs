use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_notification_ms() -> u64 {
    3000
}

fn default_show_prompt() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    /// Print a `>` prompt before reading a line
    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        let notification_ms = env::var("DICH_NOTIFICATION_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_notification_ms);

        Self {
            notification_ms,
            show_prompt: default_show_prompt(),
        }
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ms: default_notification_ms(),
            show_prompt: default_show_prompt(),
        }
    }
}
