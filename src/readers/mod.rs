use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{errors::EngineResult, models::domain::DocumentRef};

/// External collaborator that turns a document reference into raw text.
/// A failed read for one document must never abort a whole extraction run;
/// the orchestrator logs and skips it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentReader: Send + Sync {
    async fn read(&self, document: &DocumentRef) -> EngineResult<String>;
}

/// Reader for plain-text documents whose `location` is a filesystem path.
pub struct PlainTextReader;

#[async_trait]
impl DocumentReader for PlainTextReader {
    async fn read(&self, document: &DocumentRef) -> EngineResult<String> {
        let text = tokio::fs::read_to_string(&document.location).await?;
        Ok(text)
    }
}
