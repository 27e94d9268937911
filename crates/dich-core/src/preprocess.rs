use dich_types::CharCount;
use unicode_normalization::UnicodeNormalization;

/// Input text after normalization and capping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedInput {
    pub text: String,
    pub count: CharCount,
}

/// NFC-normalize the raw input and cut it to `max` characters.
///
/// Composed form keeps the counter stable for Vietnamese and other scripts
/// that may arrive with combining marks.
pub fn prepare_input(raw: &str, max: usize) -> PreparedInput {
    let normalized: String = raw.nfc().collect();
    let len = normalized.chars().count();

    let (text, truncated) = if len > max {
        (normalized.chars().take(max).collect(), true)
    } else {
        (normalized, false)
    };

    PreparedInput {
        count: CharCount {
            used: len.min(max),
            max,
            truncated,
        },
        text,
    }
}
