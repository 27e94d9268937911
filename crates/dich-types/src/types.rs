use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Events sent from the UI to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    InputChanged(String),
    SelectSource(String),
    SelectTarget(String),
    Translate,
    Swap,
    Clear,
    Copy,
    Cancel,
    ListLanguages,
    Quit,
}

/// Updates sent from the app to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    BackendReady {
        provider: String,
        endpoint: String,
    },
    /// Input text rewritten by the app (truncation, swap, clear)
    ShowInput(String),
    ShowOutput(String),
    CharCount(CharCount),
    Languages {
        source: String,
        target: String,
    },
    LanguageOptions {
        sources: Vec<LanguageOption>,
        targets: Vec<LanguageOption>,
    },
    RequestState(RequestState),
    Notify(Notification),
    Copied,
}

/// Lifecycle of the single translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestState {
    /// Translate trigger is disabled and the busy indicator shown
    pub fn is_busy(self) -> bool {
        matches!(self, RequestState::InFlight)
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestState::Idle => "idle",
            RequestState::InFlight => "in-flight",
            RequestState::Succeeded => "succeeded",
            RequestState::Failed => "failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
}

/// Character counter shown under the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub used: usize,
    pub max: usize,
    /// Input hit the cap and was cut
    pub truncated: bool,
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.used, self.max)
    }
}

/// Everything the user can be told about, recovered locally by the app
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Notice {
    #[error("Please enter some text")]
    EmptyInput,

    #[error("Text is longer than {max} characters")]
    TooLong { max: usize },

    #[error("Connection failed. Try again.")]
    NetworkFailure,

    #[error("Unexpected reply from translator. Try again.")]
    MalformedResponse,

    #[error("Translator took too long. Try again.")]
    Timeout,

    #[error("Translation cancelled")]
    Cancelled,

    #[error("A translation is already running")]
    Busy,

    #[error("No usable translation returned")]
    EmptyTranslation,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Auto Detect can only be used as the source language")]
    AutoTarget,

    #[error("Nothing to copy!")]
    NothingToCopy,

    #[error("Failed to copy")]
    CopyFailed,
}

/// Transient message, hidden by the UI after `dismiss_after`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub notice: Notice,
    pub message: String,
    pub dismiss_after: Duration,
}

impl Notification {
    pub fn new(notice: Notice, dismiss_after: Duration) -> Self {
        Self {
            message: notice.to_string(),
            notice,
            dismiss_after,
        }
    }
}
