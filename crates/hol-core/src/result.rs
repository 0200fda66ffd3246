use crate::dictionary::DictionaryEntry;
use crate::language::Language;
use crate::normalize::{is_empty_text, normalize};
use crate::similarity::similarity;
use crate::types::TranslationResult;

/// Build a result from ranked matches for text written in `from`
///
/// Confidence is the plain similarity between the input and the best entry's
/// `from` text, whatever tier selected that entry.
pub fn process(
    input: &str,
    matches: &[&DictionaryEntry],
    from: Language,
    max_suggestions: usize,
) -> TranslationResult {
    if is_empty_text(input) {
        return TranslationResult::empty(input);
    }

    let Some((best, rest)) = matches.split_first() else {
        return TranslationResult::untranslated(input);
    };

    let to = from.other();
    let Some(output) = best.text(to) else {
        tracing::warn!("Entry {} has no {} text", best.id, to);
        return TranslationResult::empty(input);
    };

    let suggestions: Vec<DictionaryEntry> = rest
        .iter()
        .take(max_suggestions)
        .map(|entry| (*entry).clone())
        .collect();

    let confidence = best
        .text(from)
        .map_or(0.0, |source| similarity(&normalize(input), &normalize(source)));

    let pronunciation = if to.is_constructed() {
        best.pronunciation.clone()
    } else {
        None
    };

    TranslationResult {
        input: input.to_string(),
        output: output.to_string(),
        pronunciation,
        confidence,
        suggestions,
    }
}

/// Confident enough and neither of the failure shapes
pub fn is_successful(result: &TranslationResult, threshold: f64) -> bool {
    result.confidence >= threshold && !result.output.is_empty() && !result.is_untranslated()
}

pub fn confidence_label(confidence: f64) -> &'static str {
    if confidence >= 0.9 {
        "Excellent"
    } else if confidence >= 0.7 {
        "Good"
    } else if confidence >= 0.5 {
        "Fair"
    } else if confidence >= 0.3 {
        "Poor"
    } else {
        "No match"
    }
}
