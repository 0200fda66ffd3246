//! Canonical text form shared by every comparison in the engine.

/// Characters dropped during normalization
const PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Lowercase, drop punctuation, trim and collapse whitespace runs to one space
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn is_exact_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Containment in either direction
pub fn contains_text(haystack: &str, needle: &str) -> bool {
    let haystack = normalize(haystack);
    let needle = normalize(needle);
    haystack.contains(&needle) || needle.contains(&haystack)
}

pub fn is_empty_text(text: &str) -> bool {
    normalize(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_case_punctuation_and_spacing() {
        assert_eq!(normalize("  Hello,   World!  "), "hello world");
        assert_eq!(normalize("Qapla'!"), "qapla'");
        assert_eq!(normalize("what?\t\nnow"), "what now");
    }

    #[test]
    fn punctuation_next_to_spaces_leaves_no_edge_space() {
        assert_eq!(normalize("Hello !"), "hello");
        assert_eq!(normalize(". a ."), "a");
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert!(is_empty_text("   "));
        assert!(is_empty_text("?!.,;:"));
        assert!(!is_empty_text(" a "));
    }

    #[test]
    fn exact_match_ignores_noise() {
        assert!(is_exact_match("Hello!", "hello"));
        assert!(!is_exact_match("hello", "hello there"));
    }

    #[test]
    fn containment_is_symmetric() {
        assert!(contains_text("good morning friend", "Morning"));
        assert!(contains_text("morning", "Good morning!"));
        assert!(!contains_text("morning", "evening"));
    }
}
