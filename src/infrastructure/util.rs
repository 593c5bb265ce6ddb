// src/infrastructure/util.rs
use std::sync::LazyLock;

use crate::application::ports::util::SlugGenerator;
use regex::Regex;

pub const MAX_SLUG_LEN: usize = 50;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Lowercases, drops everything outside `[a-z0-9]`, whitespace and `-`, turns
/// whitespace runs into single hyphens and caps the result at
/// [`MAX_SLUG_LEN`] characters.
#[derive(Default, Clone)]
pub struct RegexSlugGenerator;

impl SlugGenerator for RegexSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let kept = DISALLOWED.replace_all(&lowered, "");
        let hyphenated = WHITESPACE.replace_all(&kept, "-");
        let collapsed = HYPHENS.replace_all(&hyphenated, "-");
        let trimmed = collapsed.trim_matches('-');

        // Only ASCII survives the filter, so byte truncation is safe.
        let truncated = if trimmed.len() > MAX_SLUG_LEN {
            &trimmed[..MAX_SLUG_LEN]
        } else {
            trimmed
        };
        truncated.trim_end_matches('-').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> String {
        RegexSlugGenerator.slugify(input)
    }

    fn is_slug_shaped(s: &str) -> bool {
        s.is_empty()
            || s.split('-').all(|part| {
                !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            })
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(slug("Hello, World! 2024"), "hello-world-2024");
    }

    #[test]
    fn whitespace_and_hyphen_runs_collapse() {
        assert_eq!(slug("  Getting   Started -- Now  "), "getting-started-now");
        assert_eq!(slug("tabs\tand\nnewlines"), "tabs-and-newlines");
    }

    #[test]
    fn empty_and_symbol_only_inputs_yield_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!!! ???"), "");
        assert_eq!(slug("---"), "");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(slug("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn output_is_capped_without_trailing_hyphen() {
        // The 50th character lands on a separator.
        let title = format!("{} tail", "a".repeat(49));
        let out = slug(&title);
        assert_eq!(out, "a".repeat(49));

        let long = slug(&"word ".repeat(40));
        assert!(long.len() <= MAX_SLUG_LEN);
        assert!(!long.ends_with('-'));
    }

    #[test]
    fn output_is_always_slug_shaped() {
        for title in [
            "Hello, World! 2024",
            "  -Leading and trailing-  ",
            "Ünïcödé ☃ snow",
            "a-b--c---d",
            "x".repeat(120).as_str(),
            "12 Things about   Rust -- and More!",
        ] {
            let out = slug(title);
            assert!(is_slug_shaped(&out), "{title:?} -> {out:?}");
            assert!(out.len() <= MAX_SLUG_LEN);
            assert_eq!(slug(&out), out, "slugify is idempotent on its output");
        }
    }
}
