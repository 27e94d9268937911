//! Static language catalog.
//!
//! Codes are only obtainable through the catalog, so a [`LanguageCode`] always
//! has a display name.

use std::fmt;

use dich_types::LanguageOption;

use crate::error::LanguageError;

pub const AUTO: &str = "auto";

/// Supported languages in display order. `auto` is source-only.
const LANGUAGES: &[(&str, &str)] = &[
    (AUTO, "Auto Detect"),
    ("vi", "Vietnamese"),
    ("en", "English"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("ru", "Russian"),
    ("th", "Thai"),
    ("id", "Indonesian"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageCode {
    code: &'static str,
    name: &'static str,
}

impl LanguageCode {
    /// Look up a code in the catalog
    pub fn parse(code: &str) -> Result<Self, LanguageError> {
        let code = code.trim();
        LANGUAGES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|&(code, name)| LanguageCode { code, name })
            .ok_or_else(|| LanguageError::UnknownLanguage(code.to_string()))
    }

    /// Like [`LanguageCode::parse`] but rejects `auto`
    pub fn parse_target(code: &str) -> Result<Self, LanguageError> {
        let lang = Self::parse(code)?;
        if lang.is_auto() {
            return Err(LanguageError::AutoTarget);
        }
        Ok(lang)
    }

    pub fn auto() -> Self {
        LanguageCode {
            code: LANGUAGES[0].0,
            name: LANGUAGES[0].1,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_auto(&self) -> bool {
        self.code == AUTO
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

/// Display name for a code
pub fn name_of(code: &str) -> Result<&'static str, LanguageError> {
    LanguageCode::parse(code).map(|lang| lang.name())
}

/// Selectable source languages, `auto` first
pub fn sources() -> Vec<LanguageCode> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageCode { code, name })
        .collect()
}

/// Selectable target languages (no `auto`)
pub fn targets() -> Vec<LanguageCode> {
    sources().into_iter().filter(|l| !l.is_auto()).collect()
}

pub fn options(languages: &[LanguageCode]) -> Vec<LanguageOption> {
    languages
        .iter()
        .map(|l| LanguageOption {
            code: l.code().to_string(),
            name: l.name().to_string(),
        })
        .collect()
}

/// What a swap did to the pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapKind {
    /// Source was `auto`: it took the target, target untouched
    SourceOnly,
    /// Source and target exchanged
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePair {
    source: LanguageCode,
    target: LanguageCode,
}

impl LanguagePair {
    pub fn new(source: LanguageCode, target: LanguageCode) -> Result<Self, LanguageError> {
        if target.is_auto() {
            return Err(LanguageError::AutoTarget);
        }
        Ok(Self { source, target })
    }

    pub fn parse(source: &str, target: &str) -> Result<Self, LanguageError> {
        Self::new(LanguageCode::parse(source)?, LanguageCode::parse_target(target)?)
    }

    pub fn source(&self) -> LanguageCode {
        self.source
    }

    pub fn target(&self) -> LanguageCode {
        self.target
    }

    pub fn set_source(&mut self, source: LanguageCode) {
        self.source = source;
    }

    pub fn set_target(&mut self, target: LanguageCode) -> Result<(), LanguageError> {
        if target.is_auto() {
            return Err(LanguageError::AutoTarget);
        }
        self.target = target;
        Ok(())
    }

    /// Invert the pair. `auto` can never become a target, so an `auto` source
    /// only takes over the current target.
    pub fn swap(&mut self) -> SwapKind {
        if self.source.is_auto() {
            self.source = self.target;
            SwapKind::SourceOnly
        } else {
            std::mem::swap(&mut self.source, &mut self.target);
            SwapKind::Full
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: LanguageCode {
                code: "vi",
                name: "Vietnamese",
            },
            target: LanguageCode {
                code: "en",
                name: "English",
            },
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
