use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{
    question::{OPTION_COUNT, OPTION_LABELS},
    Question, SentencePool,
};

pub const BLANK_MARKER: &str = "______";

// Words too structural to blank out.
const STOP_WORDS: [&str; 16] = [
    "that", "this", "with", "from", "they", "have", "been", "were", "will", "when", "where",
    "which", "their", "there", "these", "those",
];

// Generic distractor pool; padded placeholders only appear if a correct
// word collides with most of it, which the pool size makes unreachable in
// practice.
const DISTRACTOR_POOL: [&str; 20] = [
    "system",
    "process",
    "method",
    "approach",
    "factor",
    "element",
    "aspect",
    "concept",
    "principle",
    "structure",
    "important",
    "significant",
    "essential",
    "necessary",
    "required",
    "appropriate",
    "suitable",
    "correct",
    "proper",
    "effective",
];

const MIN_TOKENS: usize = 4;
const MIN_BLANK_WORD_LEN: usize = 4; // strictly greater

/// Manufacture up to `requested` fill-in-the-blank questions from the
/// pool, one per distinct sentence. All randomness (blank choice, option
/// order, optional sentence order) flows through the injected `rng`.
pub fn synthesize_questions<R: Rng>(
    pool: &mut SentencePool,
    requested: usize,
    shuffle_sentences: bool,
    rng: &mut R,
) -> Vec<Question> {
    let order = if shuffle_sentences {
        pool.shuffled(rng)
    } else {
        pool.sentences().to_vec()
    };

    let mut questions = Vec::new();
    for sentence in order {
        if questions.len() >= requested {
            break;
        }
        if pool.is_used(&sentence) {
            continue;
        }
        let Some(question) = synthesize_one(&sentence, rng) else {
            continue;
        };
        pool.mark_used(&sentence);
        questions.push(question);
    }

    log::debug!(
        "Synthesized {} of {} requested questions",
        questions.len(),
        requested
    );
    questions
}

fn synthesize_one<R: Rng>(sentence: &str, rng: &mut R) -> Option<Question> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_TOKENS {
        return None;
    }

    let candidates: Vec<(usize, &str)> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| is_blankable(word))
        .map(|(index, word)| (index, *word))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let (blank_index, blank_word) = candidates[rng.gen_range(0..candidates.len())];

    let mut question_words = words.clone();
    question_words[blank_index] = BLANK_MARKER;
    let text = question_words.join(" ");

    let options = build_options(blank_word, rng);
    let correct_index = options.iter().position(|option| option == blank_word)?;
    let correct = OPTION_LABELS[correct_index];

    let labeled = options
        .into_iter()
        .enumerate()
        .map(|(index, option)| format!("{}. {}", OPTION_LABELS[index], option))
        .collect();

    Some(Question::synthesized(
        text,
        labeled,
        correct,
        blank_word.to_string(),
        sentence.to_string(),
    ))
}

fn is_blankable(word: &str) -> bool {
    word.chars().count() > MIN_BLANK_WORD_LEN
        && word.chars().all(char::is_alphabetic)
        && !STOP_WORDS.contains(&word.to_lowercase().as_str())
        && !word.chars().all(char::is_uppercase)
}

/// Correct word plus distractors, case-matched and deduplicated, shuffled
/// into display order.
fn build_options<R: Rng>(blank_word: &str, rng: &mut R) -> Vec<String> {
    let capitalize = blank_word
        .chars()
        .next()
        .is_some_and(char::is_uppercase);

    let mut options = vec![blank_word.to_string()];
    for distractor in DISTRACTOR_POOL {
        if options.len() >= OPTION_COUNT {
            break;
        }
        if distractor.eq_ignore_ascii_case(blank_word) {
            continue;
        }
        if options
            .iter()
            .any(|option| option.eq_ignore_ascii_case(distractor))
        {
            continue;
        }
        options.push(if capitalize {
            capitalize_first(distractor)
        } else {
            distractor.to_string()
        });
    }

    let mut placeholder = options.len();
    while options.len() < OPTION_COUNT {
        options.push(format!("Option{placeholder}"));
        placeholder += 1;
    }

    options.shuffle(rng);
    options
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
