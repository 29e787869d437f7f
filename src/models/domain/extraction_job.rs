use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Idle,
    Starting,
    Processing,
    Finalizing,
    Completed,
    Error,
}

impl JobState {
    /// A run is in flight; a new run must not start.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            JobState::Starting | JobState::Processing | JobState::Finalizing
        )
    }

    /// Terminal until an explicit new run resets the record.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobState::Completed | JobState::Error)
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::Idle => write!(f, "idle"),
            JobState::Starting => write!(f, "starting"),
            JobState::Processing => write!(f, "processing"),
            JobState::Finalizing => write!(f, "finalizing"),
            JobState::Completed => write!(f, "completed"),
            JobState::Error => write!(f, "error"),
        }
    }
}

/// Shared record describing the single in-flight (or most recent)
/// extraction run. Read and written only as a whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionJob {
    pub run_id: String,
    pub status: JobState,
    pub progress: u8,
    pub message: String,
    pub questions_found: usize,
    pub current_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ExtractionJob {
    pub fn idle() -> Self {
        Self {
            run_id: String::new(),
            status: JobState::Idle,
            progress: 0,
            message: "Ready to start".to_string(),
            questions_found: 0,
            current_file: String::new(),
            started_at: None,
            completed_at: None,
        }
    }

    /// Fresh record for a new run, replacing whatever came before.
    pub fn starting() -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            status: JobState::Starting,
            progress: 0,
            message: "Initializing extraction...".to_string(),
            questions_found: 0,
            current_file: String::new(),
            started_at: Some(Utc::now()),
            completed_at: None,
        }
    }
}
