use serde::{Deserialize, Serialize};

pub const OPTION_COUNT: usize = 4;
pub const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

/// Provenance of a question's correct-answer letter.
///
/// The structured parser has no way to recover an answer key from source
/// text, so its questions carry `Unverified` and a default letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    Verified,
    Unverified,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32, // 0 until the orchestrator renumbers the finalized set
    pub text: String,
    pub options: Vec<String>, // exactly 4, each prefixed "A. " through "D. "
    pub correct: char,
    pub answer_key: AnswerKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sentence: Option<String>,
}

impl Question {
    /// A question recovered verbatim from authored source text. No answer
    /// key is detected, so `correct` defaults to `A` and is flagged.
    pub fn authored(text: String, options: Vec<String>) -> Self {
        Self {
            id: 0,
            text,
            options,
            correct: 'A',
            answer_key: AnswerKey::Unverified,
            correct_text: None,
            source_sentence: None,
        }
    }

    /// A fill-in-the-blank question manufactured from prose.
    pub fn synthesized(
        text: String,
        options: Vec<String>,
        correct: char,
        correct_text: String,
        source_sentence: String,
    ) -> Self {
        Self {
            id: 0,
            text,
            options,
            correct,
            answer_key: AnswerKey::Verified,
            correct_text: Some(correct_text),
            source_sentence: Some(source_sentence),
        }
    }

    /// Index into `options` identified by the `correct` letter.
    pub fn correct_index(&self) -> usize {
        (self.correct as u8).saturating_sub(b'A') as usize
    }

    /// The correct option with its `X. ` label stripped, if present.
    pub fn correct_option_text(&self) -> Option<&str> {
        let option = self.options.get(self.correct_index())?;
        let stripped = option
            .strip_prefix(self.correct)
            .and_then(|rest| rest.strip_prefix(". "))?;
        Some(stripped)
    }
}
