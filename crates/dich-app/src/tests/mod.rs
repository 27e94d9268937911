use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dich_config::Config;
use dich_io::ClipboardSink;
use dich_translator::{ClientError, ProviderMetadata, TranslationBackend};
use dich_types::{AppEvent, Notice, RequestState};
use tokio_util::sync::CancellationToken;

use crate::presenter::Presenter;
use crate::translation::TranslationController;


/// Presenter that keeps every update for inspection
#[derive(Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<AppEvent>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<AppEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<AppEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub fn states(&self) -> Vec<RequestState> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                AppEvent::RequestState(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                AppEvent::Notify(notification) => Some(notification.notice),
                _ => None,
            })
            .collect()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                AppEvent::ShowOutput(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Presenter for RecordingPresenter {
    async fn present(&self, event: AppEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Backend answering from a queue of canned replies
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, ClientError>>>,
    prompts: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl ScriptedBackend {
    pub fn replying(replies: impl IntoIterator<Item = Result<String, ClientError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationBackend for ScriptedBackend {
    async fn send(&self, prompt: &str) -> Result<String, ClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::MalformedResponse("no scripted reply".into())))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Scripted".to_string(),
            endpoint: "memory://".to_string(),
        }
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardSink for FakeClipboard {
    async fn copy_text(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no display");
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub controller: TranslationController,
    pub presenter: Arc<RecordingPresenter>,
    pub clipboard: Arc<FakeClipboard>,
    pub shutdown: CancellationToken,
}

pub fn config(source: &str, target: &str) -> Config {
    let mut config = Config::default();
    config.translator.source_lang = source.to_string();
    config.translator.target_lang = target.to_string();
    config
}

pub fn harness(backend: Arc<dyn TranslationBackend>, config: &Config) -> Harness {
    harness_with_clipboard(backend, config, FakeClipboard::default())
}

pub fn harness_with_clipboard(
    backend: Arc<dyn TranslationBackend>,
    config: &Config,
    clipboard: FakeClipboard,
) -> Harness {
    let presenter = Arc::new(RecordingPresenter::default());
    let clipboard = Arc::new(clipboard);
    let shutdown = CancellationToken::new();
    let controller = TranslationController::new(
        backend,
        presenter.clone(),
        clipboard.clone(),
        config,
        shutdown.clone(),
    )
    .expect("valid default pair");

    Harness {
        controller,
        presenter,
        clipboard,
        shutdown,
    }
}

/// Serve `router` on an ephemeral local port
pub async fn spawn_backend(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });

    format!("http://{addr}")
}
