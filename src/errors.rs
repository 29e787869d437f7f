use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    #[error("Document unavailable: {0}")]
    DocumentUnavailable(String),

    #[error("Empty document set: {0}")]
    EmptyDocumentSet(String),

    #[error("Extraction run already active: {0}")]
    RunActive(String),

    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::DocumentUnavailable(err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::DocumentUnavailable("chapter-1.txt".into());
        assert_eq!(err.to_string(), "Document unavailable: chapter-1.txt");

        let err = EngineError::RunActive("run 42".into());
        assert_eq!(err.to_string(), "Extraction run already active: run 42");
    }

    #[test]
    fn test_io_error_maps_to_document_unavailable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: EngineError = io_err.into();

        assert!(matches!(err, EngineError::DocumentUnavailable(_)));
        assert!(err.to_string().contains("no such file"));
    }
}
