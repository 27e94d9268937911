use anyhow::Context;
use arboard::Clipboard;
use async_trait::async_trait;

/// Destination for the copy action
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn copy_text(&self, text: &str) -> anyhow::Result<()>;
}

/// OS clipboard via `arboard`
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn copy_text(&self, text: &str) -> anyhow::Result<()> {
        let text = text.to_string();

        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
            clipboard
                .set_text(text)
                .context("failed to write clipboard")?;
            tracing::debug!("Copied translation to clipboard");
            Ok(())
        })
        .await
        .context("clipboard task panicked")?
    }
}
