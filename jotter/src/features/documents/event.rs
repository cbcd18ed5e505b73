use super::model::{Document, DocumentId};

/// Events emitted by the document list, trash popover and store tasks.
#[derive(Debug, Clone)]
pub(crate) enum DocumentsEvent {
    /// Read the full document list from the store.
    Load,
    /// A list snapshot, numbered by the request that read it.
    Loaded {
        generation: u64,
        documents: Vec<Document>,
    },
    LoadFailed(String),
    Create {
        title: String,
        parent: Option<DocumentId>,
    },
    Created {
        op: u64,
        result: Result<DocumentId, String>,
    },
    ToggleExpanded(DocumentId),
    Open(DocumentId),
    Archive(DocumentId),
    Restore(DocumentId),
    Remove(DocumentId),
    Mutated {
        op: u64,
        result: Result<(), String>,
    },
    ToggleTrash,
    CloseTrash,
    TrashSearchChanged(String),
}
