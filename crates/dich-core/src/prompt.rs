use crate::language::LanguagePair;

/// Source label used when the model has to detect the input language
pub const DETECTED_LANGUAGE: &str = "detected language";

/// Instruction sent to the backend model.
///
/// The wording is what the hosted model has been tuned against; keep it
/// byte-for-byte stable.
pub fn build(pair: &LanguagePair, text: &str) -> String {
    let source = if pair.source().is_auto() {
        DETECTED_LANGUAGE
    } else {
        pair.source().name()
    };
    let target = pair.target().name();

    format!(
        "translate this text from {source} to {target} with context-aware natural language \
         translation style and only respond with the result, respond in that country's language, \
         no additional explanation, only the translated text, translate: ({text})"
    )
}
