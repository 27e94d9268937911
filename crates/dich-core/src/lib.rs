pub mod error;
pub mod language;
pub mod preprocess;
pub mod prompt;
pub mod request;
pub mod sanitize;

pub use error::{LanguageError, RequestError};
pub use language::{LanguageCode, LanguagePair, SwapKind};
pub use request::{MAX_CHARS, TranslationRequest};
pub use sanitize::Sanitizer;
