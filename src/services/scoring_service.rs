use crate::models::domain::{ExamResult, ExamSubmission, Question};

/// Grades a submission against a published question set by comparing the
/// selected letter with each question's `correct` letter.
pub struct ScoringService;

impl ScoringService {
    pub fn grade(questions: &[Question], submission: &ExamSubmission) -> ExamResult {
        let total = questions.len();

        let correct = questions
            .iter()
            .filter(|question| {
                submission
                    .answers
                    .get(&question.id)
                    .is_some_and(|selected| selected.eq_ignore_ascii_case(&question.correct))
            })
            .count();

        let answered = submission.answers.len().min(total);
        let incorrect = answered.saturating_sub(correct);
        let unattempted = total.saturating_sub(answered);
        let percentage = if total > 0 {
            ((correct as f64 / total as f64) * 100.0).round() as u8
        } else {
            0
        };

        ExamResult {
            total,
            correct,
            incorrect,
            unattempted,
            percentage,
            time_taken_seconds: submission.time_taken_seconds,
        }
    }
}
