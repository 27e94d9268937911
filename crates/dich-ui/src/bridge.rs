use std::io::{BufRead, BufReader, Read};
use std::thread;

use anyhow::Context;
use kanal::{AsyncReceiver, Sender};

/// Bridge between blocking stdin and the async UI loop
pub struct InputBridge {
    lines_tx: Sender<String>,
}

impl InputBridge {
    pub fn new(capacity: usize) -> (Self, AsyncReceiver<String>) {
        let (lines_tx, lines_rx) = kanal::bounded(capacity);
        (InputBridge { lines_tx }, lines_rx.to_async())
    }

    /// Forward lines until the reader ends or the UI stops listening.
    /// Dropping the sender closes the channel, which the UI reads as EOF.
    pub fn forward_lines(self, reader: impl Read) {
        for line in BufReader::new(reader).lines() {
            match line {
                Ok(line) => {
                    if self.lines_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("[STDIN] Read failed: {e}");
                    break;
                }
            }
        }
        tracing::debug!("[STDIN] Closed");
    }

    /// Read stdin on its own thread so a pending read never blocks shutdown
    pub fn spawn_stdin(self) -> anyhow::Result<()> {
        thread::Builder::new()
            .name("dich-stdin".to_string())
            .spawn(move || self.forward_lines(std::io::stdin()))
            .context("failed to spawn stdin reader")?;
        Ok(())
    }
}
