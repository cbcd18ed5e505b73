use thiserror::Error;

use super::model::DocumentId;

/// Errors emitted by document store adapters.
#[derive(Debug, Error)]
pub(crate) enum DocumentsError {
    #[error("Document store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Document store JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document {0} not found.")]
    NotFound(DocumentId),
}
