use std::io::{self, Write};
use std::time::{Duration, Instant};

use dich_types::CharCount;

/// UI-specific state (separate from the app's session)
pub struct UiState {
    /// Full rendering with status lines; off when piped
    pub interactive: bool,
    pub show_prompt: bool,
    pub busy: bool,
    pub source: String,
    pub target: String,
    pub count: Option<CharCount>,
    /// Print the next language list, set by `/langs`
    pub options_requested: bool,
    status: Option<(String, Instant)>,
}

impl UiState {
    pub fn new(interactive: bool, show_prompt: bool) -> Self {
        Self {
            interactive,
            show_prompt: interactive && show_prompt,
            busy: false,
            source: String::new(),
            target: String::new(),
            count: None,
            options_requested: false,
            status: None,
        }
    }

    /// Show `message` in the prompt until `dismiss_after` has passed
    pub fn set_status(&mut self, message: &str, dismiss_after: Duration, now: Instant) {
        self.status = Some((message.to_string(), now + dismiss_after));
    }

    pub fn status(&mut self, now: Instant) -> Option<&str> {
        if matches!(&self.status, Some((_, until)) if *until <= now) {
            self.status = None;
        }
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn prompt(&mut self, now: Instant) -> String {
        let mut prompt = format!("[{} -> {}", self.source, self.target);
        if let Some(count) = self.count {
            prompt.push_str(&format!(" {count}"));
        }
        if let Some(status) = self.status(now) {
            prompt.push_str(&format!(" | {status}"));
        }
        prompt.push_str("] > ");
        prompt
    }

    pub fn write_prompt(&mut self, out: &mut impl Write, now: Instant) -> io::Result<()> {
        if !self.show_prompt || self.busy {
            return Ok(());
        }
        let prompt = self.prompt(now);
        write!(out, "{prompt}")?;
        out.flush()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(true, true)
    }
}
