use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything that is neither an ASCII letter, an ASCII digit, nor whitespace.
    static ref NON_WORD: Regex = Regex::new(r"[^a-zA-Z0-9\s]").expect("valid regex");
}

/// Tokenize text into lowercase ASCII alphanumeric words, in order of appearance.
///
/// Every other character is replaced by a single space before splitting on
/// whitespace, so non-ASCII letters act as separators (`"café"` yields `["caf"]`).
/// Repeated words are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Tokenize several text sources and concatenate the results in source order.
pub fn tokenize_all<'a, I>(sources: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    sources.into_iter().flat_map(tokenize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(tokenize("Hello, World! 123-abc"), vec!["hello", "world", "123", "abc"]);
    }

    #[test]
    fn empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("?!--...").is_empty());
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(tokenize("hero HERO Hero"), vec!["hero", "hero", "hero"]);
    }

    #[test]
    fn concatenates_sources_in_order() {
        let toks = tokenize_all(["Iron Man", "", "Hero, Genius"]);
        assert_eq!(toks, vec!["iron", "man", "hero", "genius"]);
    }
}
