use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    config::Config,
    errors::{EngineError, EngineResult},
    models::domain::{DocumentRef, JobState, Question},
    readers::DocumentReader,
    services::{document_processor::DocumentProcessor, job_tracker::JobTracker},
};

/// Drives one extraction run over an ordered document set: strictly
/// sequential, progress published to the shared job record after every
/// meaningful step, early stop at the target question count.
pub struct ExtractionOrchestrator {
    reader: Arc<dyn DocumentReader>,
    tracker: Arc<JobTracker>,
    processor: DocumentProcessor,
    config: Arc<Config>,
}

impl ExtractionOrchestrator {
    pub fn new(reader: Arc<dyn DocumentReader>, tracker: Arc<JobTracker>, config: Arc<Config>) -> Self {
        let processor = DocumentProcessor::new(config.clone());
        Self {
            reader,
            tracker,
            processor,
            config,
        }
    }

    /// Claim the run slot and execute. Rejected with `RunActive` while
    /// another run is in flight.
    pub async fn run(&self, documents: &[DocumentRef]) -> EngineResult<Vec<Question>> {
        let run_id = self.tracker.begin_run().await?;
        self.execute(&run_id, documents).await
    }

    /// Body of a run whose slot is already claimed via
    /// [`JobTracker::begin_run`].
    pub(crate) async fn execute(
        &self,
        run_id: &str,
        documents: &[DocumentRef],
    ) -> EngineResult<Vec<Question>> {
        log::info!(
            "Extraction run {run_id} starting over {} documents",
            documents.len()
        );
        self.tracker
            .publish_step(JobState::Starting, 5, "Initializing document processor...")
            .await;

        if documents.is_empty() {
            let message = "No documents to process";
            self.tracker.fail(message).await;
            return Err(EngineError::EmptyDocumentSet(message.to_string()));
        }

        self.tracker
            .publish_step(
                JobState::Processing,
                10,
                format!(
                    "Found {} documents. Starting extraction...",
                    documents.len()
                ),
            )
            .await;

        let target = self.config.target_question_count;
        let total = documents.len();
        let mut rng = StdRng::from_entropy();
        let mut accumulated: Vec<Question> = Vec::new();

        for (index, document) in documents.iter().enumerate() {
            let progress = (10 + index * 70 / total) as u8;
            self.tracker
                .publish_document(progress, &document.name, accumulated.len())
                .await;

            let raw_text = match self.reader.read(document).await {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("Skipping unreadable document {}: {err}", document.name);
                    continue;
                }
            };

            let questions = match self.processor.process(&raw_text, &mut rng) {
                Ok(questions) => questions,
                Err(err) => {
                    let message = format!("Error during extraction: {err}");
                    log::error!("Run {run_id} failed on {}: {err}", document.name);
                    self.tracker.fail(&message).await;
                    return Err(EngineError::ExtractionFailed(message));
                }
            };

            log::info!(
                "Document {} yielded {} questions",
                document.name,
                questions.len()
            );
            accumulated.extend(questions);
            self.tracker.record_questions_found(accumulated.len()).await;

            if accumulated.len() >= target {
                log::info!("Reached target of {target} questions; stopping early");
                break;
            }
        }

        self.tracker
            .publish_step(
                JobState::Finalizing,
                85,
                "Finalizing questions and formatting...",
            )
            .await;

        accumulated.truncate(target);
        for (index, question) in accumulated.iter_mut().enumerate() {
            question.id = (index + 1) as u32;
        }

        self.tracker.complete(accumulated.len()).await;
        log::info!(
            "Extraction run {run_id} completed with {} questions",
            accumulated.len()
        );
        Ok(accumulated)
    }
}
