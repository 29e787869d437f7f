use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{question::OPTION_COUNT, Question};

const MIN_OPTIONS: usize = OPTION_COUNT;

// The three numbering conventions that open a question block: `1.`,
// `Q.1`/`Q1`, and `Question 1`, each with an optional same-line prompt.
static NUMBERED_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.?\s*(.*)$").expect("numbered opener regex"));
static PREFIXED_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[Qq]\.?\s*\d+\.?\s*(.*)$").expect("prefixed opener regex"));
static WORDED_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[Qq]uestion\s+\d+\.?\s*(.*)$").expect("worded opener regex"));

// Option markers: `(X)` or `X.` for a single letter A-D, either case.
static OPTION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([A-Da-d])\)|\b([A-Da-d])\.").expect("option marker regex"));

#[derive(Debug, Default)]
struct QuestionBlock {
    prompt: String,
    options: Vec<String>,
}

/// Scan raw multi-page text for explicitly authored question blocks.
///
/// Option detection is independent of block detection, so mis-segmented
/// text can attach options to the wrong block; that is an accepted
/// heuristic limit, not an error. Blocks with fewer than 4 options are
/// discarded whole. Ids are assigned 1..N in parse order; callers
/// renumber on finalization.
pub fn parse_questions(raw_text: &str) -> Vec<Question> {
    let mut questions: Vec<Question> = Vec::new();
    let mut open_block: Option<QuestionBlock> = None;

    for raw_line in raw_text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(prompt) = match_opener(line) {
            finalize_block(open_block.take(), &mut questions);
            open_block = Some(QuestionBlock {
                prompt: prompt_before_options(&prompt),
                options: Vec::new(),
            });
        }

        // The opener line itself may carry options after the prompt.
        if let Some(block) = open_block.as_mut() {
            block.options.extend(scan_options(line));
        }
    }
    finalize_block(open_block.take(), &mut questions);

    for (index, question) in questions.iter_mut().enumerate() {
        question.id = (index + 1) as u32;
    }

    log::debug!("Structured parse recovered {} questions", questions.len());
    questions
}

fn match_opener(line: &str) -> Option<String> {
    for opener in [&*NUMBERED_OPENER, &*PREFIXED_OPENER, &*WORDED_OPENER] {
        if let Some(caps) = opener.captures(line) {
            return Some(caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default());
        }
    }
    None
}

/// Prompt text up to the first option marker on the same line.
fn prompt_before_options(prompt: &str) -> String {
    match OPTION_MARKER.find(prompt) {
        Some(marker) => prompt[..marker.start()].trim().to_string(),
        None => prompt.trim().to_string(),
    }
}

/// All `(X)` / `X.` options on one line; each option's text runs to the
/// next marker or the end of the line.
fn scan_options(line: &str) -> Vec<String> {
    let markers: Vec<(usize, usize, char)> = OPTION_MARKER
        .captures_iter(line)
        .filter_map(|caps| {
            let span = caps.get(0)?;
            let letter = caps
                .get(1)
                .or_else(|| caps.get(2))?
                .as_str()
                .chars()
                .next()?;
            Some((span.start(), span.end(), letter.to_ascii_uppercase()))
        })
        .collect();

    let mut options = Vec::new();
    for (index, (_, text_start, letter)) in markers.iter().enumerate() {
        let text_end = markers
            .get(index + 1)
            .map(|(next_start, _, _)| *next_start)
            .unwrap_or(line.len());
        let text = line[*text_start..text_end].trim();
        if !text.is_empty() {
            options.push(format!("{letter}. {text}"));
        }
    }
    options
}

fn finalize_block(block: Option<QuestionBlock>, questions: &mut Vec<Question>) {
    let Some(block) = block else {
        return;
    };
    if block.prompt.is_empty() || block.options.len() < MIN_OPTIONS {
        return;
    }

    let options: Vec<String> = block.options.into_iter().take(OPTION_COUNT).collect();
    questions.push(Question::authored(block.prompt, options));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::AnswerKey;

    #[test]
    fn parses_single_line_question_with_inline_options() {
        let questions = parse_questions("Q1. What is 2+2? (A) 3 (B) 4 (C) 5 (D) 6");

        assert_eq!(questions.len(), 1);
        let question = &questions[0];
        assert!(question.text.contains("What is 2+2?"));
        assert_eq!(
            question.options,
            vec!["A. 3", "B. 4", "C. 5", "D. 6"]
        );
        assert_eq!(question.correct, 'A');
        assert_eq!(question.answer_key, AnswerKey::Unverified);
        assert_eq!(question.id, 1);
    }

    #[test]
    fn parses_multiline_block_with_dotted_options() {
        let text = "\
1. What is the capital of France
A. London
B. Paris
C. Berlin
D. Madrid";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "What is the capital of France");
        assert_eq!(
            questions[0].options,
            vec!["A. London", "B. Paris", "C. Berlin", "D. Madrid"]
        );
    }

    #[test]
    fn discards_block_with_three_options() {
        let text = "\
1. Incomplete question here
(A) one
(B) two
(C) three";

        assert!(parse_questions(text).is_empty());
    }

    #[test]
    fn keeps_only_first_four_of_five_options() {
        let text = "\
1. Overfull question here
(A) one (B) two (C) three (D) four
(A) surplus";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions[0].options,
            vec!["A. one", "B. two", "C. three", "D. four"]
        );
    }

    #[test]
    fn accepts_all_three_numbering_conventions() {
        let text = "\
1. First prompt text (A) a (B) b (C) c (D) d
Q.2 Second prompt text (A) a (B) b (C) c (D) d
Question 3. Third prompt text (A) a (B) b (C) c (D) d";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].text, "First prompt text");
        assert_eq!(questions[1].text, "Second prompt text");
        assert_eq!(questions[2].text, "Third prompt text");
        assert_eq!(
            questions.iter().map(|q| q.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn lowercase_option_markers_are_normalized() {
        let text = "\
1. Mixed case options
(a) first (b) second (c) third (d) fourth";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions[0].options,
            vec!["A. first", "B. second", "C. third", "D. fourth"]
        );
    }

    #[test]
    fn opener_without_prompt_is_discarded() {
        let text = "\
7.
(A) one (B) two (C) three (D) four";

        assert!(parse_questions(text).is_empty());
    }

    #[test]
    fn last_open_block_is_finalized_at_end_of_input() {
        let text = "\
1. Dropped question with too few options
(A) only (B) two
2. Kept question at end of file
(A) one (B) two (C) three (D) four";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Kept question at end of file");
        assert_eq!(questions[0].id, 1);
    }

    #[test]
    fn options_before_any_block_are_ignored() {
        let text = "\
(A) stray (B) stray (C) stray (D) stray
1. Real question text here
(A) one (B) two (C) three (D) four";

        let questions = parse_questions(text);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options[0], "A. one");
    }

    #[test]
    fn plain_prose_yields_no_questions() {
        let text = "The committee reviewed the proposal carefully before approval. \
                    Nothing here is numbered like an exam.";

        assert!(parse_questions(text).is_empty());
    }
}
