pub mod document;
pub mod exam_attempt;
pub mod extraction_job;
pub mod question;
pub mod sentence_pool;

pub use document::DocumentRef;
pub use exam_attempt::{ExamResult, ExamSubmission};
pub use extraction_job::{ExtractionJob, JobState};
pub use question::{AnswerKey, Question};
pub use sentence_pool::SentencePool;
