use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    errors::{EngineError, EngineResult},
    models::domain::{ExtractionJob, JobState},
};

/// Process-wide extraction job record, guarded so concurrent readers
/// always observe a whole, consistent snapshot. `snapshot()` and the
/// publish methods are the only access paths.
///
/// Within a run, `progress` and `questions_found` only move forward;
/// the exception is a failure, which reports `error` with progress 0.
pub struct JobTracker {
    job: RwLock<ExtractionJob>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self {
            job: RwLock::new(ExtractionJob::idle()),
        }
    }

    /// Atomic snapshot of the whole record.
    pub async fn snapshot(&self) -> ExtractionJob {
        self.job.read().await.clone()
    }

    /// Claim the run slot. A run is rejected while another is in flight;
    /// otherwise the record resets to a fresh `starting` state and the
    /// new run id is returned.
    pub async fn begin_run(&self) -> EngineResult<String> {
        let mut job = self.job.write().await;
        if job.status.is_active() {
            return Err(EngineError::RunActive(format!(
                "run {} is still {}",
                job.run_id, job.status
            )));
        }
        *job = ExtractionJob::starting();
        Ok(job.run_id.clone())
    }

    /// Publish a pipeline step: status, progress, and message together.
    pub async fn publish_step(&self, status: JobState, progress: u8, message: impl Into<String>) {
        let mut job = self.job.write().await;
        job.status = status;
        job.progress = job.progress.max(progress);
        job.message = message.into();
    }

    /// Publish the per-document update: the file now being processed,
    /// interpolated progress, and the running question count.
    pub async fn publish_document(&self, progress: u8, file_name: &str, questions_found: usize) {
        let mut job = self.job.write().await;
        job.status = JobState::Processing;
        job.progress = job.progress.max(progress);
        job.message = format!("Processing {file_name}...");
        job.current_file = file_name.to_string();
        job.questions_found = job.questions_found.max(questions_found);
    }

    pub async fn record_questions_found(&self, count: usize) {
        let mut job = self.job.write().await;
        job.questions_found = job.questions_found.max(count);
    }

    pub async fn complete(&self, questions_found: usize) {
        let mut job = self.job.write().await;
        job.status = JobState::Completed;
        job.progress = 100;
        job.message = format!("Successfully extracted {questions_found} questions!");
        job.questions_found = questions_found;
        job.completed_at = Some(Utc::now());
    }

    pub async fn fail(&self, message: impl Into<String>) {
        let mut job = self.job.write().await;
        job.status = JobState::Error;
        job.progress = 0;
        job.message = message.into();
        job.completed_at = Some(Utc::now());
    }
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}
