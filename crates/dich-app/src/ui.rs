use std::sync::Arc;

use dich_config::Config;
use dich_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<UiEvent>,
    config: Arc<Config>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    dich_ui::ui_loop(app_to_ui_rx, ui_to_app_tx, config.ui.clone(), cancel).await
}
