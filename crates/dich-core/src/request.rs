use uuid::Uuid;

use crate::error::RequestError;
use crate::language::LanguagePair;

/// Longest input accepted, in characters
pub const MAX_CHARS: usize = 500;

/// One translate action. Built right before the call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub id: Uuid,
    pub text: String,
    pub pair: LanguagePair,
}

impl TranslationRequest {
    pub fn new(text: &str, pair: LanguagePair) -> Result<Self, RequestError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RequestError::EmptyInput);
        }

        let len = text.chars().count();
        if len > MAX_CHARS {
            return Err(RequestError::TooLong {
                len,
                max: MAX_CHARS,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            pair,
        })
    }

    pub fn prompt(&self) -> String {
        crate::prompt::build(&self.pair, &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_is_rejected() {
        for text in ["", "   ", "\n\t "] {
            assert_eq!(
                TranslationRequest::new(text, LanguagePair::default()),
                Err(RequestError::EmptyInput)
            );
        }
    }

    #[test]
    fn over_limit_is_rejected() {
        let text = "x".repeat(MAX_CHARS + 1);
        assert_eq!(
            TranslationRequest::new(&text, LanguagePair::default()),
            Err(RequestError::TooLong {
                len: 501,
                max: MAX_CHARS
            })
        );
    }

    #[test]
    fn text_is_trimmed() {
        let request = TranslationRequest::new("  Hello \n", LanguagePair::default()).unwrap();
        assert_eq!(request.text, "Hello");
        assert!(request.prompt().ends_with("translate: (Hello)"));
    }

    #[test]
    fn limit_is_inclusive() {
        let text = "x".repeat(MAX_CHARS);
        assert!(TranslationRequest::new(&text, LanguagePair::default()).is_ok());
    }

    #[test]
    fn every_request_gets_its_own_id() {
        let a = TranslationRequest::new("a", LanguagePair::default()).unwrap();
        let b = TranslationRequest::new("a", LanguagePair::default()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
