use crate::models::domain::{AnswerKey, Question};

/// Fixed question set served when no extraction run has ever published a
/// set, so callers never face an empty quiz.
pub fn fallback_questions() -> Vec<Question> {
    vec![
        fixed(
            1,
            "But just then, both of them were ______ by the soldiers",
            ["A. system", "B. process", "C. method", "D. captured"],
            'D',
            "captured",
        ),
        fixed(
            2,
            "______ is not innocent such as Uday",
            ["A. Method", "B. System", "C. Process", "D. Harmit"],
            'D',
            "Harmit",
        ),
        fixed(
            3,
            "The following ______ has been divided into four segments",
            ["A. process", "B. sentence", "C. method", "D. system"],
            'B',
            "sentence",
        ),
        fixed(
            4,
            "If there is no need to substitute it, select No substitution ______",
            ["A. method", "B. required", "C. process", "D. system"],
            'B',
            "required",
        ),
        fixed(
            5,
            "But, when the ______ was thrown in front of the lion, the lion licked him and quietly sat beside him",
            ["A. system", "B. slave", "C. method", "D. process"],
            'B',
            "slave",
        ),
        fixed(
            6,
            "______ out a tower of pots",
            ["A. knock", "B. process", "C. method", "D. system"],
            'A',
            "knock",
        ),
        fixed(
            7,
            "The following sentence has been divided into four ______",
            ["A. method", "B. system", "C. process", "D. segments"],
            'D',
            "segments",
        ),
        fixed(
            8,
            "How is the structure of health infrastructure and health care system in ______",
            ["A. Process", "B. Method", "C. System", "D. India"],
            'D',
            "India",
        ),
        fixed(
            9,
            "Parts of the following sentence have been underlined and given as ______",
            ["A. options", "B. process", "C. system", "D. method"],
            'A',
            "options",
        ),
        fixed(
            10,
            "Read the passage carefully and select the most ______ option to fill in each blank",
            ["A. appropriate", "B. process", "C. system", "D. method"],
            'A',
            "appropriate",
        ),
    ]
}

fn fixed(id: u32, text: &str, options: [&str; 4], correct: char, correct_text: &str) -> Question {
    Question {
        id,
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct,
        answer_key: AnswerKey::Verified,
        correct_text: Some(correct_text.to_string()),
        source_sentence: None,
    }
}
