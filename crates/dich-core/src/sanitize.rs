//! Cleanup of raw model replies.
//!
//! Reasoning spans are removed by scanning for the opening marker and the
//! first closing marker after it. An opening marker without a closing one
//! leaves the remaining text as is.

const DEFAULT_OPEN: &str = "<think>";
const DEFAULT_CLOSE: &str = "</think>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    open: String,
    close: String,
}

impl Sanitizer {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Text fit for display. May be empty.
    pub fn clean(&self, raw: &str) -> String {
        let stripped = self.strip_reasoning(raw);
        collapse_blank_lines(&stripped).trim().to_string()
    }

    /// Drop every `open ... close` span, markers included, until none is left.
    fn strip_reasoning(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        if self.open.is_empty() || self.close.is_empty() {
            return text;
        }

        while let Some(start) = text.find(&self.open) {
            let body = start + self.open.len();
            let Some(offset) = text[body..].find(&self.close) else {
                break;
            };
            let end = body + offset + self.close.len();
            text.replace_range(start..end, "");
        }

        text
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN, DEFAULT_CLOSE)
    }
}

/// Clean with the default `<think>` markers
pub fn clean(raw: &str) -> String {
    Sanitizer::default().clean(raw)
}

/// Runs of blank lines become a single empty line.
fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    // split on '\n' only, so a stray '\r' survives unchanged on a second pass
    for line in text.split('\n') {
        let blank = line.trim().is_empty();
        if blank {
            if !previous_blank {
                lines.push("");
            }
        } else {
            lines.push(line);
        }
        previous_blank = blank;
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "Xin chào",
        "  padded  \n",
        "<think>plan</think>Hello",
        "<think>\nstep 1\n\nstep 2\n</think>\n\nBonjour",
        "a\n\n\n\nb",
        "a\n \n\t\n\nb\n\n",
        "<think>unterminated reasoning\nHello",
        "before</think>after",
        "<think>a<think>b</think>c</think>d",
        "<thi<think>x</think>nk>hidden</think>shown",
        "one\r\n\r\n\r\ntwo\r",
        "x<think></think>y",
        "<think>only reasoning</think>",
        "\n\n<think>\n</think>\n\n",
    ];

    #[test]
    fn strips_single_line_span() {
        assert_eq!(clean("<think>plan</think>Hello"), "Hello");
    }

    #[test]
    fn strips_multi_line_span() {
        assert_eq!(
            clean("<think>\nstep 1\n\nstep 2\n</think>\n\nBonjour"),
            "Bonjour"
        );
    }

    #[test]
    fn strips_every_span_non_greedy() {
        assert_eq!(
            clean("<think>a</think>keep<think>b</think> this"),
            "keep this"
        );
    }

    #[test]
    fn unterminated_marker_is_left_alone() {
        assert_eq!(
            clean("<think>unterminated reasoning\nHello"),
            "<think>unterminated reasoning\nHello"
        );
    }

    #[test]
    fn stray_closing_marker_is_left_alone() {
        assert_eq!(clean("before</think>after"), "before</think>after");
    }

    #[test]
    fn nested_opening_uses_first_close() {
        assert_eq!(clean("<think>a<think>b</think>c</think>d"), "c</think>d");
    }

    #[test]
    fn only_reasoning_gives_empty() {
        assert_eq!(clean("<think>only reasoning</think>"), "");
        assert_eq!(clean("\n\n<think>\n</think>\n\n"), "");
    }

    #[test]
    fn blank_runs_collapse_to_one() {
        assert_eq!(clean("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean("a\n \n\t\n\nb\n\n"), "a\n\nb");
        assert_eq!(clean("a\nb"), "a\nb");
    }

    #[test]
    fn custom_markers() {
        let sanitizer = Sanitizer::new("<reasoning>", "</reasoning>");
        assert_eq!(
            sanitizer.clean("<reasoning>\nhmm\n</reasoning>Hola <think>x</think>"),
            "Hola <think>x</think>"
        );
    }

    #[test]
    fn empty_markers_do_nothing() {
        let sanitizer = Sanitizer::new("", "");
        assert_eq!(sanitizer.clean("  text  "), "text");
    }

    #[test]
    fn clean_is_idempotent() {
        for sample in SAMPLES {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "sample: {sample:?}");
        }
    }

    #[test]
    fn no_reasoning_span_survives() {
        for sample in SAMPLES {
            let cleaned = clean(sample);
            if let Some(start) = cleaned.find(DEFAULT_OPEN) {
                assert!(
                    !cleaned[start..].contains(DEFAULT_CLOSE),
                    "sample: {sample:?} -> {cleaned:?}"
                );
            }
        }
    }

    #[test]
    fn rebuilt_marker_is_removed_too() {
        assert_eq!(clean("<thi<think>x</think>nk>hidden</think>shown"), "shown");
    }
}
