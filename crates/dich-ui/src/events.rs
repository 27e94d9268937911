use std::io::{self, Write};
use std::time::Instant;

use dich_types::{AppEvent, LanguageOption, RequestState};

use crate::state::UiState;

/// Render one app update. Returns true when the prompt should be redrawn.
///
/// Piped sessions only get translations and notifications, so output can be
/// fed to other tools.
pub fn render(
    event: &AppEvent,
    state: &mut UiState,
    out: &mut impl Write,
    now: Instant,
) -> io::Result<bool> {
    match event {
        AppEvent::BackendReady { provider, endpoint } => {
            tracing::info!("[UI] Backend {provider} at {endpoint}");
            if state.interactive {
                writeln!(out, "dich: translating with {provider} ({endpoint})")?;
                writeln!(out, "Type text to translate, /help for commands.")?;
            }
            Ok(false)
        }
        AppEvent::ShowInput(text) => {
            if state.interactive {
                if text.is_empty() {
                    writeln!(out, "(input cleared)")?;
                } else {
                    writeln!(out, "input: {text}")?;
                }
            }
            Ok(false)
        }
        AppEvent::ShowOutput(text) => {
            // Output is cleared before every request; nothing to show for that
            if text.is_empty() {
                return Ok(false);
            }
            writeln!(out, "{text}")?;
            Ok(!state.busy)
        }
        AppEvent::CharCount(count) => {
            state.count = Some(*count);
            if count.truncated && state.interactive {
                writeln!(out, "input capped at {count}")?;
            }
            Ok(false)
        }
        AppEvent::Languages { source, target } => {
            let changed = !state.source.is_empty()
                && (state.source != *source || state.target != *target);
            state.source = source.clone();
            state.target = target.clone();
            if changed && state.interactive {
                writeln!(out, "{source} -> {target}")?;
            }
            Ok(true)
        }
        AppEvent::LanguageOptions { sources, targets } => {
            if state.options_requested {
                state.options_requested = false;
                writeln!(out, "from: {}", list(sources))?;
                writeln!(out, "to:   {}", list(targets))?;
                return Ok(true);
            }
            Ok(false)
        }
        AppEvent::RequestState(request) => {
            state.busy = request.is_busy();
            match request {
                RequestState::InFlight if state.interactive => {
                    writeln!(out, "translating...")?;
                    Ok(false)
                }
                RequestState::Idle => Ok(true),
                _ => Ok(false),
            }
        }
        AppEvent::Notify(notification) => {
            state.set_status(&notification.message, notification.dismiss_after, now);
            if state.interactive {
                writeln!(out, "! {}", notification.message)?;
            } else {
                // Keep stdout clean for the translations
                eprintln!("dich: {}", notification.message);
            }
            Ok(!state.busy)
        }
        AppEvent::Copied => {
            if state.interactive {
                writeln!(out, "copied to clipboard")?;
            }
            Ok(true)
        }
    }
}

fn list(options: &[LanguageOption]) -> String {
    options
        .iter()
        .map(|option| format!("{} ({})", option.code, option.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dich_types::{CharCount, Notice, Notification};
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(state: &mut UiState, events: &[AppEvent]) -> String {
        let mut out = Vec::new();
        for event in events {
            render(event, state, &mut out, Instant::now()).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    fn languages(source: &str, target: &str) -> AppEvent {
        AppEvent::Languages {
            source: source.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn translation_round_trip() {
        let mut state = UiState::default();
        let text = run(
            &mut state,
            &[
                languages("English", "Vietnamese"),
                AppEvent::RequestState(RequestState::InFlight),
                AppEvent::ShowOutput(String::new()),
                AppEvent::ShowOutput("Xin chào".to_string()),
                AppEvent::RequestState(RequestState::Succeeded),
                AppEvent::RequestState(RequestState::Idle),
            ],
        );

        assert_eq!(text, "translating...\nXin chào\n");
        assert!(!state.busy);
        assert_eq!(state.source, "English");
    }

    #[test]
    fn piped_session_prints_only_translations() {
        let mut state = UiState::new(false, true);
        let text = run(
            &mut state,
            &[
                AppEvent::BackendReady {
                    provider: "Cloudflare Worker".to_string(),
                    endpoint: "http://localhost".to_string(),
                },
                AppEvent::ShowInput("Hello".to_string()),
                AppEvent::RequestState(RequestState::InFlight),
                AppEvent::ShowOutput("Xin chào".to_string()),
                AppEvent::RequestState(RequestState::Idle),
                AppEvent::Copied,
            ],
        );

        assert_eq!(text, "Xin chào\n");
    }

    #[test]
    fn notification_sets_status() {
        let mut state = UiState::default();
        let notification = Notification::new(Notice::NetworkFailure, Duration::from_secs(3));
        let mut out = Vec::new();

        let redraw = render(
            &AppEvent::Notify(notification),
            &mut state,
            &mut out,
            Instant::now(),
        )
        .unwrap();

        assert!(redraw);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "! Connection failed. Try again.\n"
        );
        assert_eq!(
            state.status(Instant::now()),
            Some("Connection failed. Try again.")
        );
    }

    #[test]
    fn truncation_is_announced() {
        let mut state = UiState::default();
        let text = run(
            &mut state,
            &[AppEvent::CharCount(CharCount {
                used: 500,
                max: 500,
                truncated: true,
            })],
        );

        assert_eq!(text, "input capped at 500/500\n");
        assert_eq!(state.count.map(|c| c.used), Some(500));
    }

    #[test]
    fn language_list_only_when_requested() {
        let options = AppEvent::LanguageOptions {
            sources: vec![LanguageOption {
                code: "auto".to_string(),
                name: "Auto Detect".to_string(),
            }],
            targets: vec![LanguageOption {
                code: "en".to_string(),
                name: "English".to_string(),
            }],
        };

        let mut state = UiState::default();
        assert_eq!(run(&mut state, &[options.clone()]), "");

        state.options_requested = true;
        assert_eq!(
            run(&mut state, &[options]),
            "from: auto (Auto Detect)\nto:   en (English)\n"
        );
        assert!(!state.options_requested);
    }

    #[test]
    fn language_change_is_echoed() {
        let mut state = UiState::default();
        let text = run(
            &mut state,
            &[
                languages("Auto Detect", "English"),
                languages("English", "English"),
            ],
        );

        assert_eq!(text, "English -> English\n");
    }
}
