use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Splits text into sentence bodies, dropping terminators and blank
/// fragments. Used by the key-point and readability paths.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BODY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Splits text into sentences keeping terminal punctuation with its
/// sentence. A sentence ends at `.`/`!`/`?` followed by whitespace; a
/// trailing fragment without a terminator still counts as a sentence.
#[must_use]
pub fn split_sentences_keep_terminators(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') && chars.peek().is_some_and(|next| next.is_whitespace()) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Counts whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Finds the byte offset of the first ASCII-case-insensitive occurrence of
/// `needle` in `haystack`. The needle must be ASCII; a match can therefore
/// never begin mid-codepoint.
#[must_use]
pub fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sentences_detects_boundaries() {
        let sentences = split_sentences("One. Two! Three?");
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn terminators_stay_with_their_sentence() {
        let sentences = split_sentences_keep_terminators("First point. Second point! Trailing");
        assert_eq!(
            sentences,
            vec!["First point.", "Second point!", "Trailing"]
        );
    }

    #[test]
    fn abbreviation_dot_without_space_does_not_split() {
        let sentences = split_sentences_keep_terminators("Version 2.5 shipped. Done.");
        assert_eq!(sentences, vec!["Version 2.5 shipped.", "Done."]);
    }

    #[test]
    fn case_insensitive_find_returns_byte_offset() {
        assert_eq!(find_ignore_ascii_case("Rain, And sun", ", and"), Some(4));
        assert_eq!(find_ignore_ascii_case("no match here", ", and"), None);
    }

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  two   words "), 2);
    }
}
