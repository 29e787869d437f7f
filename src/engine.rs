use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    errors::EngineResult,
    models::domain::{DocumentRef, ExamResult, ExamSubmission, ExtractionJob, Question},
    readers::DocumentReader,
    services::{fallback, ExtractionOrchestrator, JobTracker, ScoringService},
};

/// Facade wiring the engine together: the reader collaborator, the shared
/// job record, and the published question set a presentation layer reads.
///
/// One background run at a time; triggering while a run is active is
/// rejected rather than preempting the in-flight run. On a failed run the
/// previously published set stays untouched, so consumers always see a
/// stale-but-valid quiz (or the fallback set) instead of an empty one.
#[derive(Clone)]
pub struct QuizEngine {
    reader: Arc<dyn DocumentReader>,
    tracker: Arc<JobTracker>,
    config: Arc<Config>,
    questions: Arc<RwLock<Vec<Question>>>,
}

impl QuizEngine {
    pub fn new(reader: Arc<dyn DocumentReader>, config: Config) -> Self {
        Self {
            reader,
            tracker: Arc::new(JobTracker::new()),
            config: Arc::new(config),
            questions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Spawn a background extraction run over `documents`. Returns the
    /// run id immediately; progress is observed through `job_status()`.
    pub async fn start_extraction(&self, documents: Vec<DocumentRef>) -> EngineResult<String> {
        let run_id = self.tracker.begin_run().await?;

        let orchestrator = ExtractionOrchestrator::new(
            self.reader.clone(),
            self.tracker.clone(),
            self.config.clone(),
        );
        let published = self.questions.clone();
        let task_run_id = run_id.clone();
        tokio::spawn(async move {
            match orchestrator.execute(&task_run_id, &documents).await {
                Ok(questions) => {
                    let mut set = published.write().await;
                    *set = questions;
                }
                Err(err) => {
                    // Job record already reports the error; the published
                    // set keeps its last good value.
                    log::error!("Extraction run {task_run_id} failed: {err}");
                }
            }
        });

        Ok(run_id)
    }

    /// Run an extraction to completion on the caller's task, publishing
    /// the finalized set before returning it.
    pub async fn run_extraction(&self, documents: &[DocumentRef]) -> EngineResult<Vec<Question>> {
        let orchestrator = ExtractionOrchestrator::new(
            self.reader.clone(),
            self.tracker.clone(),
            self.config.clone(),
        );
        let questions = orchestrator.run(documents).await?;

        let mut set = self.questions.write().await;
        *set = questions.clone();
        Ok(questions)
    }

    /// Current question set; the fixed fallback set when no run has ever
    /// published one.
    pub async fn questions(&self) -> Vec<Question> {
        let set = self.questions.read().await;
        if set.is_empty() {
            fallback::fallback_questions()
        } else {
            set.clone()
        }
    }

    /// Atomic snapshot of the job record for polling consumers.
    pub async fn job_status(&self) -> ExtractionJob {
        self.tracker.snapshot().await
    }

    /// Grade a submission against the current question set.
    pub async fn score(&self, submission: &ExamSubmission) -> ExamResult {
        let questions = self.questions().await;
        ScoringService::grade(&questions, submission)
    }
}
