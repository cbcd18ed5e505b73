use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub(crate) struct DocumentId(Uuid);

impl DocumentId {
    /// Allocate a fresh random identifier.
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted document record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Document {
    pub(crate) id: DocumentId,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) parent: Option<DocumentId>,
    #[serde(default)]
    pub(crate) is_archived: bool,
    #[serde(default)]
    pub(crate) created_at: u64,
}

impl Document {
    pub(crate) fn new(
        title: String,
        parent: Option<DocumentId>,
        created_at: u64,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            title,
            parent,
            is_archived: false,
            created_at,
        }
    }
}

/// Store mutations that report progress through toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentOp {
    Create,
    Archive,
    Restore,
    Remove,
}

impl DocumentOp {
    pub(crate) fn pending_message(self) -> &'static str {
        match self {
            DocumentOp::Create => "Creating a new note...",
            DocumentOp::Archive => "Moving to trash...",
            DocumentOp::Restore => "Restoring note...",
            DocumentOp::Remove => "Deleting note...",
        }
    }

    pub(crate) fn success_message(self) -> &'static str {
        match self {
            DocumentOp::Create => "New note created!",
            DocumentOp::Archive => "Note moved to trash!",
            DocumentOp::Restore => "Note restored!",
            DocumentOp::Remove => "Note deleted!",
        }
    }

    pub(crate) fn error_message(self) -> &'static str {
        match self {
            DocumentOp::Create => {
                "Failed to create a new note. Please try again."
            },
            DocumentOp::Archive => "Failed to archive note.",
            DocumentOp::Restore => "Failed to restore note.",
            DocumentOp::Remove => "Failed to delete note.",
        }
    }
}

/// Row of the flattened, visible document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DocumentRow {
    Item {
        id: DocumentId,
        title: String,
        level: usize,
        expanded: bool,
    },
    /// Placeholder under an expanded document without children.
    Empty { level: usize },
}
