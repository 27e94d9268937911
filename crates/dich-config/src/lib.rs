use std::env;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod translator;
pub mod ui;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub ui: UiConfig,

    /// Capacity of the UI -> app channel
    pub ui_channel_capacity: usize,
    /// Capacity of the app -> UI channel
    pub app_channel_capacity: usize,
}

impl Config {
    /// Defaults overridden by `DICH_*` environment variables
    pub fn new() -> Self {
        let ui_channel_capacity = env::var("DICH_UI_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64);

        let app_channel_capacity = env::var("DICH_APP_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(128);

        Config {
            translator: TranslatorConfig::new(),
            ui: UiConfig::new(),

            ui_channel_capacity,
            app_channel_capacity,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            translator: TranslatorConfig::default(),
            ui: UiConfig::default(),

            ui_channel_capacity: 64,
            app_channel_capacity: 128,
        }
    }
}
