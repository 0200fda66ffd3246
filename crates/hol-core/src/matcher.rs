use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::dictionary::DictionaryEntry;
use crate::language::FieldAccessor;
use crate::normalize::{contains_text, is_empty_text, is_exact_match, normalize};
use crate::similarity::similarity;
use crate::types::{MatchCandidate, Tier};

/// Score `field_text` against already-normalized input
pub fn score(normalized_input: &str, field_text: &str) -> (Tier, f64) {
    if is_exact_match(normalized_input, field_text) {
        (Tier::Exact, Tier::EXACT_SCORE)
    } else if contains_text(normalized_input, field_text) {
        (Tier::Partial, Tier::PARTIAL_SCORE)
    } else {
        (Tier::Fuzzy, similarity(normalized_input, &normalize(field_text)))
    }
}

/// Candidates scoring strictly above `threshold`, best first
///
/// Entries whose `field` is blank are skipped. Equal scores keep the
/// iteration order of `entries`.
pub fn rank_matches<'a, I>(
    input: &str,
    entries: I,
    field: FieldAccessor,
    threshold: f64,
) -> Vec<MatchCandidate<'a>>
where
    I: IntoIterator<Item = &'a DictionaryEntry>,
{
    if is_empty_text(input) {
        return vec![];
    }

    let normalized_input = normalize(input);
    let mut scanned = 0usize;

    let mut candidates: Vec<MatchCandidate<'a>> = entries
        .into_iter()
        .filter_map(|entry| {
            let text = field(entry)?;
            scanned += 1;
            let (tier, similarity) = score(&normalized_input, text);
            (similarity > threshold).then_some(MatchCandidate {
                entry,
                similarity,
                tier,
            })
        })
        .collect();

    // stable: ties stay in dictionary order
    candidates.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        "Matched {} of {} entries for '{}'",
        candidates.len(),
        scanned,
        normalized_input
    );

    candidates
}

pub fn find_matches<'a, I>(
    input: &str,
    entries: I,
    field: FieldAccessor,
    threshold: f64,
) -> Vec<&'a DictionaryEntry>
where
    I: IntoIterator<Item = &'a DictionaryEntry>,
{
    rank_matches(input, entries, field, threshold)
        .into_iter()
        .map(|candidate| candidate.entry)
        .collect()
}

/// Substring lookup over both languages and the category label
pub fn search_dictionary<'a>(query: &str, entries: &'a [DictionaryEntry]) -> Vec<&'a DictionaryEntry> {
    let query = normalize(query);
    if query.is_empty() {
        return vec![];
    }

    entries
        .iter()
        .filter(|entry| {
            normalize(&entry.english).contains(&query)
                || normalize(&entry.klingon).contains(&query)
                || entry
                    .category
                    .as_deref()
                    .is_some_and(|c| normalize(c).contains(&query))
        })
        .collect()
}

pub fn get_by_category<'a>(category: &str, entries: &'a [DictionaryEntry]) -> Vec<&'a DictionaryEntry> {
    entries
        .iter()
        .filter(|entry| entry.category.as_deref() == Some(category))
        .collect()
}

/// Distinct non-empty categories, sorted
pub fn list_categories(entries: &[DictionaryEntry]) -> Vec<&str> {
    entries
        .iter()
        .filter_map(|entry| entry.category.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn entry(id: &str, english: &str, klingon: &str, category: Option<&str>) -> DictionaryEntry {
        DictionaryEntry {
            category: category.map(str::to_string),
            ..DictionaryEntry::new(id, english, klingon)
        }
    }

    fn sample() -> Vec<DictionaryEntry> {
        vec![
            entry("1", "hello", "nuqneH", Some("greetings")),
            entry("2", "goodbye", "Qapla'", Some("greetings")),
            entry("3", "hello there", "nuqneH jup", Some("greetings")),
            entry("4", "helxx", "xyz", None),
            entry("5", "warrior", "SuvwI'", Some("combat")),
            entry("6", "", "ghay'cha'", Some("exclamations")),
        ]
    }

    #[test]
    fn scoring_tiers() {
        assert_eq!(score("hello", "Hello!"), (Tier::Exact, 1.0));
        assert_eq!(score("hello", "hello there"), (Tier::Partial, 0.9));
        assert_eq!(score("hello there", "Hello"), (Tier::Partial, 0.9));
        let (tier, value) = score("hallo", "hello");
        assert_eq!(tier, Tier::Fuzzy);
        assert!((value - 0.8).abs() < 1e-9);
    }

    #[test]
    fn ranks_exact_before_partial() {
        let entries = sample();
        let ranked = rank_matches("Hello", &entries, Language::English.field(), 0.6);
        let ids: Vec<&str> = ranked.iter().map(|c| c.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(ranked[0].tier, Tier::Exact);
        assert_eq!(ranked[1].tier, Tier::Partial);
    }

    #[test]
    fn score_equal_to_threshold_is_excluded() {
        let entries = sample();
        let matches = find_matches("hello", &entries, Language::English.field(), 0.6);
        assert!(matches.iter().all(|e| e.id != "4"));
    }

    #[test]
    fn blank_fields_are_skipped() {
        let entries = sample();
        let ranked = rank_matches("hello", &entries, Language::English.field(), 0.0);
        assert!(ranked.iter().all(|c| c.entry.id != "6"));
    }

    #[test]
    fn ties_keep_dictionary_order() {
        let entries = vec![
            entry("a", "good morning", "", None),
            entry("b", "morning star", "", None),
            entry("c", "morning", "", None),
        ];
        let matches = find_matches("morning", &entries, Language::English.field(), 0.6);
        let ids: Vec<&str> = matches.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn searches_other_field() {
        let entries = sample();
        let matches = find_matches("nuqneH", &entries, Language::Klingon.field(), 0.6);
        assert_eq!(matches.first().map(|e| e.id.as_str()), Some("1"));
    }

    #[test]
    fn blank_input_matches_nothing() {
        let entries = sample();
        assert!(find_matches("  ?! ", &entries, Language::English.field(), 0.0).is_empty());
    }

    #[test]
    fn search_covers_both_languages_and_category() {
        let entries = sample();
        let ids = |q: &str| -> Vec<String> {
            search_dictionary(q, &entries).into_iter().map(|e| e.id.clone()).collect()
        };
        assert_eq!(ids("HELLO"), vec!["1", "3"]);
        assert_eq!(ids("suvwi"), vec!["5"]);
        assert_eq!(ids("combat"), vec!["5"]);
        assert!(ids("").is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let entries = sample();
        assert_eq!(get_by_category("greetings", &entries).len(), 3);
        assert!(get_by_category("Greetings", &entries).is_empty());
    }

    #[test]
    fn categories_sorted_and_distinct() {
        let mut entries = sample();
        entries.push(entry("7", "empty", "x", Some("")));
        assert_eq!(
            list_categories(&entries),
            vec!["combat", "exclamations", "greetings"]
        );
    }
}
