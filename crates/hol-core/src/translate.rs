use hol_config::engine::EngineConfig;

use crate::dictionary::DictionaryEntry;
use crate::language::Language;
use crate::matcher::find_matches;
use crate::normalize::is_empty_text;
use crate::result::process;
use crate::types::TranslationResult;

/// Translate between two language identifiers
///
/// Blank text and unsupported identifiers both give [`TranslationResult::empty`].
pub fn translate(
    text: &str,
    from: &str,
    to: &str,
    dictionary: &[DictionaryEntry],
    config: &EngineConfig,
) -> TranslationResult {
    if is_empty_text(text) {
        return TranslationResult::empty(text);
    }

    let (from_lang, to_lang) = match (from.parse::<Language>(), to.parse::<Language>()) {
        (Ok(from_lang), Ok(to_lang)) => (from_lang, to_lang),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Rejected language pair {} -> {}: {}", from, to, e);
            return TranslationResult::empty(text);
        }
    };

    translate_between(text, from_lang, to_lang, dictionary, config)
}

/// Typed form of [`translate`]; output always reads the side opposite `from`
///
/// Thresholds outside `[0, 1]` in `config` are replaced by their defaults.
pub fn translate_between(
    text: &str,
    from: Language,
    to: Language,
    dictionary: &[DictionaryEntry],
    config: &EngineConfig,
) -> TranslationResult {
    if is_empty_text(text) {
        return TranslationResult::empty(text);
    }

    tracing::debug!("Translating '{}' {} -> {}", text, from, to);

    let config = config.validated();

    let output_field = from.other().field();
    let usable = dictionary.iter().filter(|entry| output_field(*entry).is_some());
    let matches = find_matches(text, usable, from.field(), config.match_threshold);

    let result = process(text, &matches, from, config.max_suggestions);
    tracing::debug!(
        "Result '{}' with confidence {:.3} and {} suggestions",
        result.output,
        result.confidence,
        result.suggestions.len()
    );

    result
}
