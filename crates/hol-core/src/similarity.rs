//! Normalized edit-distance similarity.

use strsim::{levenshtein, normalized_levenshtein};

/// Levenshtein distance over chars, unit costs
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// `1 - distance / longer length`, in `[0, 1]`; two empty strings score 1
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    similarity(a, b) >= threshold
}

/// Highest-scoring candidate; earlier candidates win ties
pub fn find_most_similar<'a, S: AsRef<str>>(target: &str, candidates: &'a [S]) -> Option<&'a S> {
    let mut best: Option<(&S, f64)> = None;

    for candidate in candidates {
        let score = similarity(target, candidate.as_ref());
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein_distance("hello", "hello"), 0);
        assert_eq!(levenshtein_distance("hello", "hallo"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
    }

    #[test]
    fn distance_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(similarity("日本語", "日本"), 1.0 - 1.0 / 3.0);
    }

    #[test]
    fn empty_edge_cases() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "a"), 0.0);
        assert_eq!(similarity("a", ""), 0.0);
    }

    #[test]
    fn two_edits_in_five_is_the_default_threshold() {
        assert_eq!(similarity("hello", "helxx"), 0.6);
        assert!(is_similar("hello", "helxx", 0.6));
        assert!(!is_similar("hello", "hexxx", 0.6));
    }

    #[test]
    fn most_similar_prefers_first_on_tie() {
        let candidates = ["cat", "bat", "car"];
        assert_eq!(find_most_similar("cot", &candidates), Some(&"cat"));
        assert_eq!(find_most_similar("cab", &candidates), Some(&"cat"));
        assert_eq!(find_most_similar("bar", &candidates), Some(&"bat"));
    }

    #[test]
    fn most_similar_of_nothing() {
        let candidates: [String; 0] = [];
        assert_eq!(find_most_similar("anything", &candidates), None);
    }
}
