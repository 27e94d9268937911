use async_trait::async_trait;
use dich_types::AppEvent;
use kanal::AsyncSender;

/// Output side of the presentation layer
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn present(&self, event: AppEvent);
}

/// Forwards updates to the UI task
pub struct ChannelPresenter {
    app_to_ui_tx: AsyncSender<AppEvent>,
}

impl ChannelPresenter {
    pub fn new(app_to_ui_tx: AsyncSender<AppEvent>) -> Self {
        Self { app_to_ui_tx }
    }
}

#[async_trait]
impl Presenter for ChannelPresenter {
    async fn present(&self, event: AppEvent) {
        if let Err(e) = self.app_to_ui_tx.send(event).await {
            tracing::warn!("UI channel closed, dropping update: {e}");
        }
    }
}
