//! Translation session: input, language pair, output and the single
//! request lifecycle.
//!
//! Every failure ends here as a notification; nothing is retried and the
//! controller always settles back in [`RequestState::Idle`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dich_config::Config;
use dich_core::language::{self, LanguageCode, LanguagePair, SwapKind};
use dich_core::preprocess::prepare_input;
use dich_core::{LanguageError, MAX_CHARS, RequestError, Sanitizer, TranslationRequest};
use dich_io::ClipboardSink;
use dich_translator::{ClientError, TranslationBackend};
use dich_types::{AppEvent, Notice, Notification, RequestState};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::presenter::Presenter;

/// How a translate action ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input failed validation, no request was sent
    Rejected(Notice),
    /// Sanitized translation, possibly empty
    Translated(String),
    Failed(Notice),
}

enum Failure {
    Client(ClientError),
    Cancelled,
}

impl Failure {
    fn notice(&self) -> Notice {
        match self {
            Failure::Client(ClientError::NetworkFailure { .. }) => Notice::NetworkFailure,
            Failure::Client(ClientError::MalformedResponse(_)) => Notice::MalformedResponse,
            Failure::Client(ClientError::Timeout(_)) => Notice::Timeout,
            Failure::Cancelled => Notice::Cancelled,
        }
    }
}

/// Sends notifications, also while the controller is busy translating
#[derive(Clone)]
pub struct Notifier {
    presenter: Arc<dyn Presenter>,
    dismiss_after: Duration,
}

impl Notifier {
    pub async fn notify(&self, notice: Notice) {
        self.presenter
            .present(AppEvent::Notify(Notification::new(
                notice,
                self.dismiss_after,
            )))
            .await;
    }
}

pub struct TranslationController {
    backend: Arc<dyn TranslationBackend>,
    presenter: Arc<dyn Presenter>,
    clipboard: Arc<dyn ClipboardSink>,
    sanitizer: Sanitizer,
    notifier: Notifier,

    pair: LanguagePair,
    input: String,
    output: String,
    state: RequestState,

    shutdown: CancellationToken,
    cancel: CancellationToken,
}

impl TranslationController {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        presenter: Arc<dyn Presenter>,
        clipboard: Arc<dyn ClipboardSink>,
        config: &Config,
        shutdown: CancellationToken,
    ) -> anyhow::Result<Self> {
        let pair = LanguagePair::parse(&config.translator.source_lang, &config.translator.target_lang)
            .context("invalid default language pair")?;
        let notifier = Notifier {
            presenter: Arc::clone(&presenter),
            dismiss_after: config.ui.notification_duration(),
        };

        Ok(Self {
            backend,
            presenter,
            clipboard,
            sanitizer: Sanitizer::new(
                config.translator.reasoning_open.clone(),
                config.translator.reasoning_close.clone(),
            ),
            notifier,

            pair,
            input: String::new(),
            output: String::new(),
            state: RequestState::Idle,

            cancel: shutdown.child_token(),
            shutdown,
        })
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn pair(&self) -> LanguagePair {
        self.pair
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn notifier(&self) -> Notifier {
        self.notifier.clone()
    }

    /// Token that aborts the current (or next) request when cancelled
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Initial screen: backend, options, pair, counter, state
    pub async fn start(&self) {
        let meta = self.backend.metadata();
        self.presenter
            .present(AppEvent::BackendReady {
                provider: meta.name,
                endpoint: meta.endpoint,
            })
            .await;
        self.publish_options().await;
        self.publish_languages().await;
        self.publish_count().await;
        self.presenter
            .present(AppEvent::RequestState(self.state))
            .await;
    }

    pub async fn publish_options(&self) {
        self.presenter
            .present(AppEvent::LanguageOptions {
                sources: language::options(&language::sources()),
                targets: language::options(&language::targets()),
            })
            .await;
    }

    pub async fn set_input(&mut self, raw: &str) {
        let prepared = prepare_input(raw, MAX_CHARS);
        let rewritten = prepared.text != raw;
        self.input = prepared.text;

        if prepared.count.truncated {
            tracing::debug!(max = MAX_CHARS, "Input truncated");
        }
        if rewritten {
            self.presenter
                .present(AppEvent::ShowInput(self.input.clone()))
                .await;
        }
        self.presenter
            .present(AppEvent::CharCount(prepared.count))
            .await;
    }

    pub async fn select_source(&mut self, code: &str) {
        match LanguageCode::parse(code) {
            Ok(source) => {
                self.pair.set_source(source);
                self.publish_languages().await;
            }
            Err(e) => self.reject_language(e).await,
        }
    }

    pub async fn select_target(&mut self, code: &str) {
        let result = LanguageCode::parse_target(code).and_then(|t| self.pair.set_target(t));
        match result {
            Ok(()) => self.publish_languages().await,
            Err(e) => self.reject_language(e).await,
        }
    }

    pub async fn swap(&mut self) {
        match self.pair.swap() {
            SwapKind::SourceOnly => {
                tracing::debug!(pair = %self.pair, "Swapped from auto, source only");
            }
            SwapKind::Full => {
                let new_input = std::mem::take(&mut self.output);
                self.output = std::mem::take(&mut self.input);

                // Old output may be over the cap
                let prepared = prepare_input(&new_input, MAX_CHARS);
                self.input = prepared.text;

                self.presenter
                    .present(AppEvent::ShowInput(self.input.clone()))
                    .await;
                self.presenter
                    .present(AppEvent::ShowOutput(self.output.clone()))
                    .await;
                self.presenter
                    .present(AppEvent::CharCount(prepared.count))
                    .await;
                tracing::debug!(pair = %self.pair, "Swapped languages and text");
            }
        }
        self.publish_languages().await;
    }

    pub async fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.presenter.present(AppEvent::ShowInput(String::new())).await;
        self.presenter.present(AppEvent::ShowOutput(String::new())).await;
        self.publish_count().await;
    }

    pub async fn copy(&self) {
        if self.output.trim().is_empty() {
            self.notify(Notice::NothingToCopy).await;
            return;
        }

        match self.clipboard.copy_text(&self.output).await {
            Ok(()) => self.presenter.present(AppEvent::Copied).await,
            Err(e) => {
                tracing::warn!("Copy failed: {e:#}");
                self.notify(Notice::CopyFailed).await;
            }
        }
    }

    /// Run one translate action through the whole pipeline
    pub async fn translate(&mut self) -> Outcome {
        let request = match TranslationRequest::new(&self.input, self.pair) {
            Ok(request) => request,
            Err(e) => {
                let notice = match e {
                    RequestError::EmptyInput => Notice::EmptyInput,
                    RequestError::TooLong { max, .. } => Notice::TooLong { max },
                };
                tracing::debug!("Translate rejected: {e}");
                self.notify(notice.clone()).await;
                return Outcome::Rejected(notice);
            }
        };

        let span = tracing::info_span!("translate", id = %request.id, pair = %request.pair);
        let outcome = self.run(request).instrument(span).await;

        self.transition(RequestState::Idle).await;
        if self.cancel.is_cancelled() {
            self.cancel = self.shutdown.child_token();
        }

        outcome
    }

    async fn run(&mut self, request: TranslationRequest) -> Outcome {
        self.transition(RequestState::InFlight).await;
        self.output.clear();
        self.presenter.present(AppEvent::ShowOutput(String::new())).await;

        let prompt = request.prompt();
        let cancel = self.cancel.clone();
        let backend = Arc::clone(&self.backend);

        tracing::info!(chars = request.text.chars().count(), "Translating");
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Failure::Cancelled),
            reply = backend.send(&prompt) => reply.map_err(Failure::Client),
        };

        match result {
            Ok(raw) => {
                let text = self.sanitizer.clean(&raw);
                self.output = text.clone();
                self.presenter.present(AppEvent::ShowOutput(text.clone())).await;
                self.transition(RequestState::Succeeded).await;

                if text.is_empty() {
                    tracing::warn!(raw_len = raw.len(), "Reply had no usable text");
                    self.notify(Notice::EmptyTranslation).await;
                } else {
                    tracing::info!(chars = text.chars().count(), "Translation done");
                }
                Outcome::Translated(text)
            }
            Err(failure) => {
                match &failure {
                    Failure::Client(e) => tracing::error!("Translation failed: {e}"),
                    Failure::Cancelled => tracing::info!("Translation cancelled"),
                }
                let notice = failure.notice();
                self.transition(RequestState::Failed).await;
                self.notify(notice.clone()).await;
                Outcome::Failed(notice)
            }
        }
    }

    async fn transition(&mut self, state: RequestState) {
        tracing::debug!(from = %self.state, to = %state, "Request state");
        self.state = state;
        self.presenter.present(AppEvent::RequestState(state)).await;
    }

    async fn notify(&self, notice: Notice) {
        self.notifier.notify(notice).await;
    }

    async fn reject_language(&self, err: LanguageError) {
        tracing::debug!("Language selection rejected: {err}");
        let notice = match err {
            LanguageError::UnknownLanguage(code) => Notice::UnknownLanguage(code),
            LanguageError::AutoTarget => Notice::AutoTarget,
        };
        self.notify(notice).await;
    }

    async fn publish_languages(&self) {
        self.presenter
            .present(AppEvent::Languages {
                source: self.pair.source().name().to_string(),
                target: self.pair.target().name().to_string(),
            })
            .await;
    }

    async fn publish_count(&self) {
        let count = prepare_input(&self.input, MAX_CHARS).count;
        self.presenter.present(AppEvent::CharCount(count)).await;
    }
}
