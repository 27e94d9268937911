#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("\"auto\" is only valid as a source language")]
    AutoTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Input is empty")]
    EmptyInput,

    #[error("Input is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },
}
