#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{DocumentRef, Question};

    /// A document text with a handful of authored question blocks.
    pub fn authored_exam_text(question_count: usize) -> String {
        (1..=question_count)
            .map(|i| {
                format!("{i}. Authored question number {i}\n(A) one (B) two (C) three (D) four\n")
            })
            .collect()
    }

    /// Prose with sentences that pass the educational-content filter.
    pub fn prose_text() -> &'static str {
        "The committee reviewed the proposal carefully before approval. \
         The mountain range stretches across the northern border region. \
         Several villages celebrate the harvest festival every autumn season."
    }

    pub fn test_document(name: &str) -> DocumentRef {
        DocumentRef::new(name, name)
    }

    /// A well-formed authored question with the given id.
    pub fn test_question(id: u32) -> Question {
        let mut question = Question::authored(
            format!("Question {id}"),
            vec![
                "A. one".to_string(),
                "B. two".to_string(),
                "C. three".to_string(),
                "D. four".to_string(),
            ],
        );
        question.id = id;
        question
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_authored_exam_text() {
        let text = authored_exam_text(3);

        assert!(text.contains("1. Authored question number 1"));
        assert!(text.contains("3. Authored question number 3"));
        assert_eq!(text.matches("(A)").count(), 3);
    }

    #[test]
    fn test_fixtures_test_question() {
        let question = test_question(7);

        assert_eq!(question.id, 7);
        assert_eq!(question.options.len(), 4);
    }
}
