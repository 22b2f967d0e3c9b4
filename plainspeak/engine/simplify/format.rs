use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static REPEATED_PERIODS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());
static REPEATED_COMMAS: Lazy<Regex> = Lazy::new(|| Regex::new(r",{2,}").unwrap());
static MISSING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])([a-z])").unwrap());

/// Cosmetic cleanup pass; always runs last in the pipeline.
///
/// Collapses whitespace runs and repeated `.`/`,`, trims, and restores the
/// space after sentence punctuation glued to a lowercase letter.
#[must_use]
pub fn clean_formatting(text: &str) -> String {
    let mut out = WHITESPACE_RUNS.replace_all(text, " ").into_owned();
    out = REPEATED_PERIODS.replace_all(&out, ".").into_owned();
    out = REPEATED_COMMAS.replace_all(&out, ",").into_owned();
    out = MISSING_SPACE.replace_all(&out, "${1} ${2}").into_owned();
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(clean_formatting("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn collapses_repeated_punctuation() {
        assert_eq!(clean_formatting("Done... next,, item."), "Done. next, item.");
    }

    #[test]
    fn restores_space_after_sentence_punctuation() {
        assert_eq!(clean_formatting("First.second"), "First. second");
    }

    #[test]
    fn uppercase_after_period_is_untouched() {
        assert_eq!(clean_formatting("U.S. law"), "U.S. law");
    }
}
