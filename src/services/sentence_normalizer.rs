use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::SentencePool;

// Bounds for the educational-content filter; both ends exclusive.
const MIN_SENTENCE_LEN: usize = 20;
const MAX_SENTENCE_LEN: usize = 120;
const MIN_SPACE_COUNT: usize = 3;
const MIN_ALPHA_TOKENS: usize = 4;

// Source watermarks that mark a sentence as exam boilerplate, not content.
const EXCLUDED_SOURCE_TAGS: &[&str] = &["CHSL"];

static PAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)-{2,}\s*page\s+\d+\s*-{2,}").expect("page marker regex"));
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s.,!?;:-]").expect("unsafe chars regex"));
static SENTENCE_TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("terminator regex"));
static FOUR_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("digit run regex"));

/// Clean raw document text into an ordered sequence of sentences worth
/// turning into questions. Deterministic; candidates failing the filter
/// are dropped silently.
pub fn normalize_sentences(raw_text: &str) -> Vec<String> {
    if raw_text.trim().is_empty() {
        return Vec::new();
    }

    let text = PAGE_MARKER.replace_all(raw_text, " ");
    let text = UNSAFE_CHARS.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    SENTENCE_TERMINATOR
        .split(&text)
        .map(str::trim)
        .filter(|candidate| is_quiz_worthy(candidate))
        .map(str::to_string)
        .collect()
}

/// Convenience wrapper building a pool directly from raw text.
pub fn build_sentence_pool(raw_text: &str) -> SentencePool {
    SentencePool::new(normalize_sentences(raw_text))
}

fn is_quiz_worthy(sentence: &str) -> bool {
    let len = sentence.chars().count();
    if len <= MIN_SENTENCE_LEN || len >= MAX_SENTENCE_LEN {
        return false;
    }
    if sentence.matches(' ').count() <= MIN_SPACE_COUNT {
        return false;
    }
    if FOUR_DIGIT_RUN.is_match(sentence) {
        return false;
    }
    // Question-number and page-number fragments survive sentence splitting;
    // they are markers, not prose.
    if sentence.starts_with("Q ") || sentence.starts_with("Page ") {
        return false;
    }
    if EXCLUDED_SOURCE_TAGS.iter().any(|tag| sentence.contains(tag)) {
        return false;
    }

    let alpha_tokens = sentence
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && word.chars().all(char::is_alphabetic))
        .count();
    alpha_tokens >= MIN_ALPHA_TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ordinary_prose_sentences() {
        let text = "The committee reviewed the proposal carefully before approval. \
                    The mountain range stretches across the northern border region.";

        let sentences = normalize_sentences(text);

        assert_eq!(sentences.len(), 2);
        assert_eq!(
            sentences[0],
            "The committee reviewed the proposal carefully before approval"
        );
    }

    #[test]
    fn collapses_whitespace_and_strips_unsafe_characters() {
        let text = "The   committee\treviewed\n\nthe proposal © carefully before approval.";

        let sentences = normalize_sentences(text);

        assert_eq!(sentences.len(), 1);
        assert!(!sentences[0].contains('©'));
        assert!(!sentences[0].contains("  "));
    }

    #[test]
    fn drops_sentences_outside_length_bounds() {
        let short = "Too short to keep.";
        let long = format!("{} end of line.", "very long filler words ".repeat(10));

        assert!(normalize_sentences(short).is_empty());
        assert!(normalize_sentences(&long).is_empty());
    }

    #[test]
    fn drops_sentences_with_four_digit_runs() {
        let text = "The treaty was signed by both parties in 1947 without delay.";

        assert!(normalize_sentences(text).is_empty());
    }

    #[test]
    fn drops_question_and_page_number_fragments() {
        let text = "Q 12 asks about the history of the region here. \
                    Page 4 continues the discussion of the border dispute.";

        assert!(normalize_sentences(text).is_empty());
    }

    #[test]
    fn drops_sentences_carrying_source_tags() {
        let text = "This CHSL paper contains material reused across several sessions.";

        assert!(normalize_sentences(text).is_empty());
    }

    #[test]
    fn requires_four_substantial_alphabetic_tokens() {
        // Plenty of characters and spaces, but mostly numbers and short words.
        let text = "An ox at 12 44 91 up 33 218 47 56 is 7 no 2 ok.";

        assert!(normalize_sentences(text).is_empty());
    }

    #[test]
    fn removes_page_break_markers_before_splitting() {
        let text = "The committee reviewed the proposal --- PAGE 2 --- carefully before approval.";

        let sentences = normalize_sentences(text);

        assert_eq!(sentences.len(), 1);
        assert!(!sentences[0].to_lowercase().contains("page"));
    }

    #[test]
    fn empty_input_yields_empty_pool() {
        assert!(normalize_sentences("").is_empty());
        assert!(normalize_sentences("   \n\t ").is_empty());
        assert!(build_sentence_pool("").is_empty());
    }
}
