use std::collections::{HashMap, HashSet};

use super::model::{Document, DocumentId, DocumentOp, DocumentRow};

/// Store call awaiting its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingOperation {
    pub(crate) op: DocumentOp,
    /// Document acted on, or the parent for creates.
    pub(crate) target: Option<DocumentId>,
    /// Whether success should close the open document.
    pub(crate) closes_open: bool,
}

/// Document tree, expansion and trash popover state.
#[derive(Debug, Default)]
pub(crate) struct DocumentsState {
    documents: Vec<Document>,
    loaded: bool,
    expanded: HashSet<DocumentId>,
    trash_open: bool,
    trash_search: String,
    rows: Vec<DocumentRow>,
    /// Number of the most recent list request.
    load_requests: u64,
    /// Number of the snapshot currently shown.
    shown_load: u64,
    next_operation: u64,
    pending: HashMap<u64, PendingOperation>,
}

impl DocumentsState {
    pub(crate) fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Return whether a load or store mutation is in flight.
    pub(crate) fn is_busy(&self) -> bool {
        !self.loaded || !self.pending.is_empty()
    }

    pub(crate) fn is_trash_open(&self) -> bool {
        self.trash_open
    }

    pub(crate) fn trash_search(&self) -> &str {
        &self.trash_search
    }

    pub(crate) fn is_expanded(&self, id: DocumentId) -> bool {
        self.expanded.contains(&id)
    }

    pub(crate) fn find(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|document| document.id == id)
    }

    /// Replace the document list with a fresh store snapshot.
    pub(crate) fn replace(&mut self, documents: Vec<Document>) {
        self.expanded
            .retain(|id| documents.iter().any(|document| document.id == *id));
        self.documents = documents;
        self.loaded = true;
        self.refresh_rows();
    }

    /// Number a new list request.
    pub(crate) fn begin_load(&mut self) -> u64 {
        self.load_requests = self.load_requests.wrapping_add(1);
        self.load_requests
    }

    /// Show a snapshot unless a later request already replaced it.
    ///
    /// Returns `false` when the snapshot is stale and was dropped.
    pub(crate) fn apply_snapshot(
        &mut self,
        generation: u64,
        documents: Vec<Document>,
    ) -> bool {
        if self.loaded && generation <= self.shown_load {
            return false;
        }

        self.shown_load = generation;
        self.replace(documents);
        true
    }

    /// Mark the list as loaded after a failed read.
    pub(crate) fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub(crate) fn toggle_expanded(&mut self, id: DocumentId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        self.refresh_rows();
    }

    pub(crate) fn expand(&mut self, id: DocumentId) {
        if self.expanded.insert(id) {
            self.refresh_rows();
        }
    }

    pub(crate) fn toggle_trash(&mut self) {
        self.trash_open = !self.trash_open;
        if !self.trash_open {
            self.trash_search.clear();
        }
    }

    pub(crate) fn close_trash(&mut self) {
        self.trash_open = false;
        self.trash_search.clear();
    }

    pub(crate) fn set_trash_search(&mut self, value: String) {
        self.trash_search = value;
    }

    /// Register an in-flight store call and return its request id.
    pub(crate) fn begin_operation(
        &mut self,
        operation: PendingOperation,
    ) -> u64 {
        self.next_operation = self.next_operation.wrapping_add(1);
        let id = self.next_operation;
        self.pending.insert(id, operation);
        id
    }

    pub(crate) fn finish_operation(
        &mut self,
        id: u64,
    ) -> Option<PendingOperation> {
        self.pending.remove(&id)
    }

    /// Return whether `id` is `ancestor` or nested below it.
    pub(crate) fn is_within(
        &self,
        id: DocumentId,
        ancestor: DocumentId,
    ) -> bool {
        let mut current = Some(id);
        let mut steps = 0;
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            if steps > self.documents.len() {
                return false;
            }
            steps += 1;
            current = self.find(candidate).and_then(|doc| doc.parent);
        }
        false
    }

    /// Return live children of `parent`, newest first.
    pub(crate) fn children(
        &self,
        parent: Option<DocumentId>,
    ) -> Vec<&Document> {
        let mut children: Vec<&Document> = self
            .documents
            .iter()
            .filter(|document| {
                !document.is_archived && document.parent == parent
            })
            .collect();
        children.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        children
    }

    /// Return the visible tree flattened into indented rows.
    pub(crate) fn rows(&self) -> &[DocumentRow] {
        &self.rows
    }

    fn refresh_rows(&mut self) {
        let mut rows = Vec::new();
        self.push_rows(None, 0, &mut rows);
        self.rows = rows;
    }

    fn push_rows(
        &self,
        parent: Option<DocumentId>,
        level: usize,
        rows: &mut Vec<DocumentRow>,
    ) {
        // Bounded like `is_within` so a corrupt file cannot recurse forever.
        if level > self.documents.len() {
            return;
        }

        let children = self.children(parent);
        if children.is_empty() && parent.is_some() {
            rows.push(DocumentRow::Empty { level });
            return;
        }

        for document in children {
            let expanded = self.is_expanded(document.id);
            rows.push(DocumentRow::Item {
                id: document.id,
                title: document.title.clone(),
                level,
                expanded,
            });
            if expanded {
                self.push_rows(Some(document.id), level + 1, rows);
            }
        }
    }

    /// Return archived documents matching the trash search, newest first.
    pub(crate) fn trashed(&self) -> Vec<&Document> {
        let needle = self.trash_search.trim().to_lowercase();
        let mut trashed: Vec<&Document> = self
            .documents
            .iter()
            .filter(|document| document.is_archived)
            .filter(|document| {
                needle.is_empty()
                    || document.title.to_lowercase().contains(&needle)
            })
            .collect();
        trashed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        trashed
    }
}
