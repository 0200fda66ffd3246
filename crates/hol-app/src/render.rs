use std::fmt::Write;

use hol_core::dictionary::DictionaryEntry;
use hol_core::language::Language;
use hol_core::result::confidence_label;
use hol_core::types::TranslationResult;

/// Human-readable translation report
pub fn translation(result: &TranslationResult, successful: bool, output_lang: Option<Language>) -> String {
    let mut out = String::new();

    if result.output.is_empty() {
        out.push_str("(nothing to translate)\n");
        return out;
    }

    let _ = writeln!(out, "{}", result.output);
    if let Some(pronunciation) = &result.pronunciation {
        let _ = writeln!(out, "  pronounced: {pronunciation}");
    }
    let _ = writeln!(
        out,
        "  confidence: {:.0}% ({}){}",
        result.confidence * 100.0,
        confidence_label(result.confidence),
        if successful { "" } else { ", not a confident match" }
    );

    if !result.suggestions.is_empty() {
        out.push_str("  see also:\n");
        for entry in &result.suggestions {
            let text = match output_lang {
                Some(Language::English) => (&entry.klingon, &entry.english),
                _ => (&entry.english, &entry.klingon),
            };
            let _ = writeln!(out, "    {} = {}", text.0, text.1);
        }
    }

    out
}

pub fn entries(entries: &[&DictionaryEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = write!(out, "{} = {}", entry.english, entry.klingon);
        if let Some(pronunciation) = &entry.pronunciation {
            let _ = write!(out, " ({pronunciation})");
        }
        if let Some(category) = &entry.category {
            let _ = write!(out, " [{category}]");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_full_result() {
        let result = TranslationResult {
            input: "hello".to_string(),
            output: "nuqneH".to_string(),
            pronunciation: Some("nook-NEKH".to_string()),
            confidence: 1.0,
            suggestions: vec![DictionaryEntry::new("2", "hello there", "nuqneH jup")],
        };

        let text = translation(&result, true, Some(Language::Klingon));
        assert_eq!(
            text,
            "nuqneH\n  pronounced: nook-NEKH\n  confidence: 100% (Excellent)\n  see also:\n    hello there = nuqneH jup\n"
        );
    }

    #[test]
    fn renders_failure_shapes() {
        assert_eq!(
            translation(&TranslationResult::empty(""), false, None),
            "(nothing to translate)\n"
        );

        let text = translation(&TranslationResult::untranslated("xyz"), false, Some(Language::Klingon));
        assert!(text.starts_with("[xyz]\n"));
        assert!(text.contains("0% (No match), not a confident match"));
    }

    #[test]
    fn entry_lines() {
        let entry = DictionaryEntry {
            category: Some("combat".to_string()),
            ..DictionaryEntry::new("1", "warrior", "SuvwI'")
        };
        assert_eq!(entries(&[&entry]), "warrior = SuvwI' [combat]\n");
    }
}
