use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Answers submitted against a published question set: question id to
/// selected option letter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSubmission {
    pub answers: HashMap<u32, char>,
    #[serde(default)]
    pub time_taken_seconds: u64,
}

impl ExamSubmission {
    pub fn new(answers: HashMap<u32, char>, time_taken_seconds: u64) -> Self {
        Self {
            answers,
            time_taken_seconds,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub percentage: u8,
    pub time_taken_seconds: u64,
}
