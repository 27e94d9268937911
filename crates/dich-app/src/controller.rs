use std::sync::Arc;

use dich_config::Config;
use dich_io::ClipboardSink;
use dich_translator::TranslationBackend;
use dich_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::presenter::ChannelPresenter;
use crate::translation::TranslationController;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<UiEvent>, AsyncReceiver<UiEvent>),
}

impl ChannelSet {
    pub fn new(config: &Config) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(config.app_channel_capacity),
            ui_to_app: kanal::bounded_async(config.ui_channel_capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    config: Arc<Config>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            channels: ChannelSet::new(&config),
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        backend: Arc<dyn TranslationBackend>,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> anyhow::Result<JoinSet<anyhow::Result<()>>> {
        let presenter = Arc::new(ChannelPresenter::new(self.channels.app_to_ui.0.clone()));
        let controller = TranslationController::new(
            backend,
            presenter,
            clipboard,
            &self.config,
            self.cancel_token.clone(),
        )?;

        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            controller,
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.clone(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.config.clone(),
            self.cancel_token.child_token(),
        ));

        Ok(tasks)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
