//! dich - translate text through a hosted language model from the terminal

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dich_config::Config;
use dich_io::SystemClipboard;
use dich_translator::WorkerClient;
use tokio::signal;
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

mod controller;
mod events;
mod presenter;
mod profile;
mod translation;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;

#[derive(Parser, Debug)]
#[command(name = "dich", version, about = "Translate text with a hosted language model")]
struct Args {
    /// JSON config file (defaults to ./dich.json, then environment)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Translation backend URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Source language code, `auto` to detect
    #[arg(long)]
    from: Option<String>,

    /// Target language code
    #[arg(long)]
    to: Option<String>,

    /// Give up on the backend after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.translator.endpoint = endpoint.clone();
        }
        if let Some(from) = &self.from {
            config.translator.source_lang = from.clone();
        }
        if let Some(to) = &self.to {
            config.translator.target_lang = to.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.translator.timeout_secs = timeout_secs;
        }
    }
}

/// Logs go to stderr, stdout belongs to the UI
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn log_task_exit(result: Result<anyhow::Result<()>, JoinError>) {
    match result {
        Ok(Ok(())) => debug!("Task exited"),
        Ok(Err(e)) => error!("Task failed: {e:#}"),
        Err(e) => error!("Task panicked: {e}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env may carry RUST_LOG, so read it before the subscriber
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    init_tracing(args.json_logs);

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring .env: {e}"),
    }

    let mut config = profile::load_config(args.config.as_deref())?;
    args.apply(&mut config);
    info!(
        endpoint = %config.translator.endpoint,
        timeout_secs = config.translator.timeout_secs,
        source = %config.translator.source_lang,
        target = %config.translator.target_lang,
        "Configuration loaded"
    );

    let backend = Arc::new(WorkerClient::new(
        config.translator.endpoint.clone(),
        config.translator.timeout(),
    ));

    let app = AppController::new(Arc::new(config));
    let mut tasks = app.spawn_tasks(backend, Arc::new(SystemClipboard))?;

    tokio::select! {
        result = signal::ctrl_c() => {
            result.context("failed to listen for ctrl+c")?;
            info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => log_task_exit(result),
    }

    app.shutdown();
    while let Some(result) = tasks.join_next().await {
        log_task_exit(result);
    }

    info!("dich shutting down");
    Ok(())
}
