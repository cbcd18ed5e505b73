use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::errors::DocumentsError;
use super::model::{Document, DocumentId};
use crate::config;

const DOCUMENTS_FILE_NAME: &str = "documents.json";

/// Persistence contract for the document tree.
pub(crate) trait DocumentStore: Send + Sync {
    /// Create a document and return its identifier.
    fn create(
        &self,
        title: &str,
        parent: Option<DocumentId>,
    ) -> Result<DocumentId, DocumentsError>;

    /// Return every document, archived ones included.
    fn list(&self) -> Result<Vec<Document>, DocumentsError>;

    /// Move a document and its descendants to the trash.
    fn archive(&self, id: DocumentId) -> Result<(), DocumentsError>;

    /// Bring a document and its descendants back from the trash.
    fn restore(&self, id: DocumentId) -> Result<(), DocumentsError>;

    /// Delete a document and its descendants permanently.
    fn remove(&self, id: DocumentId) -> Result<(), DocumentsError>;
}

/// Store handle shared between the reducer and background tasks.
pub(crate) type SharedDocumentStore = Arc<dyn DocumentStore>;

#[derive(Debug, Default, Serialize, Deserialize)]
struct DocumentsFile {
    #[serde(default)]
    documents: Vec<Document>,
}

/// Document store backed by a single JSON file.
#[derive(Debug)]
pub(crate) struct JsonDocumentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonDocumentStore {
    /// Open the store at the default config location.
    pub(crate) fn open_default() -> Self {
        Self::new(config::config_file_path(DOCUMENTS_FILE_NAME))
    }

    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> Result<Vec<Document>, DocumentsError> {
        let Some(data) = config::read_optional(&self.path)? else {
            return Ok(Vec::new());
        };

        let file: DocumentsFile = serde_json::from_str(&data)?;
        Ok(file.documents)
    }

    fn write(&self, documents: Vec<Document>) -> Result<(), DocumentsError> {
        let file = DocumentsFile { documents };
        let payload = serde_json::to_string_pretty(&file)?;
        config::write_atomic(&self.path, payload.as_bytes())?;
        Ok(())
    }

    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Vec<Document>) -> Result<T, DocumentsError>,
    ) -> Result<T, DocumentsError> {
        let _guard = self.guard();
        let mut documents = self.read()?;
        let value = apply(&mut documents)?;
        self.write(documents)?;
        Ok(value)
    }
}

impl DocumentStore for JsonDocumentStore {
    fn create(
        &self,
        title: &str,
        parent: Option<DocumentId>,
    ) -> Result<DocumentId, DocumentsError> {
        self.mutate(|documents| {
            if let Some(parent) = parent {
                find_index(documents, parent)?;
            }

            let document =
                Document::new(String::from(title), parent, now_millis());
            let id = document.id;
            documents.push(document);
            Ok(id)
        })
    }

    fn list(&self) -> Result<Vec<Document>, DocumentsError> {
        let _guard = self.guard();
        self.read()
    }

    fn archive(&self, id: DocumentId) -> Result<(), DocumentsError> {
        self.mutate(|documents| archive_subtree(documents, id))
    }

    fn restore(&self, id: DocumentId) -> Result<(), DocumentsError> {
        self.mutate(|documents| restore_subtree(documents, id))
    }

    fn remove(&self, id: DocumentId) -> Result<(), DocumentsError> {
        self.mutate(|documents| remove_subtree(documents, id))
    }
}

/// Mark a document and all of its descendants as archived.
pub(crate) fn archive_subtree(
    documents: &mut [Document],
    id: DocumentId,
) -> Result<(), DocumentsError> {
    let subtree = collect_subtree(documents, id)?;
    for document in documents.iter_mut() {
        if subtree.contains(&document.id) {
            document.is_archived = true;
        }
    }
    Ok(())
}

/// Unarchive a document and its descendants.
///
/// A restored document whose parent is still archived moves to the root.
pub(crate) fn restore_subtree(
    documents: &mut [Document],
    id: DocumentId,
) -> Result<(), DocumentsError> {
    let index = find_index(documents, id)?;
    let parent_archived = documents[index]
        .parent
        .and_then(|parent| documents.iter().find(|doc| doc.id == parent))
        .is_some_and(|parent| parent.is_archived);

    let subtree = collect_subtree(documents, id)?;
    for document in documents.iter_mut() {
        if subtree.contains(&document.id) {
            document.is_archived = false;
        }
    }
    if parent_archived {
        documents[index].parent = None;
    }
    Ok(())
}

/// Delete a document and all of its descendants.
pub(crate) fn remove_subtree(
    documents: &mut Vec<Document>,
    id: DocumentId,
) -> Result<(), DocumentsError> {
    let subtree = collect_subtree(documents, id)?;
    documents.retain(|document| !subtree.contains(&document.id));
    Ok(())
}

/// Return `root` and every transitive child of it.
pub(crate) fn collect_subtree(
    documents: &[Document],
    root: DocumentId,
) -> Result<HashSet<DocumentId>, DocumentsError> {
    find_index(documents, root)?;

    let mut subtree = HashSet::from([root]);
    let mut frontier = vec![root];
    while let Some(current) = frontier.pop() {
        for document in documents {
            if document.parent == Some(current) && subtree.insert(document.id)
            {
                frontier.push(document.id);
            }
        }
    }

    Ok(subtree)
}

fn find_index(
    documents: &[Document],
    id: DocumentId,
) -> Result<usize, DocumentsError> {
    documents
        .iter()
        .position(|document| document.id == id)
        .ok_or(DocumentsError::NotFound(id))
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{DocumentStore, JsonDocumentStore};
    use crate::features::documents::errors::DocumentsError;
    use crate::features::documents::model::DocumentId;

    #[test]
    fn given_missing_file_when_listed_then_store_is_empty() {
        let root = test_temp_dir("missing");
        let store = JsonDocumentStore::new(root.join("documents.json"));

        let documents = store.list().expect("missing file should list");

        assert!(documents.is_empty());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn given_created_documents_when_reopened_then_they_are_persisted() {
        let root = test_temp_dir("round_trip");
        let path = root.join("documents.json");
        let store = JsonDocumentStore::new(path.clone());

        let parent = store
            .create("Untitled Document", None)
            .expect("parent should be created");
        let child = store
            .create("Child", Some(parent))
            .expect("child should be created");

        let reopened = JsonDocumentStore::new(path);
        let documents = reopened.list().expect("store should list");
        assert_eq!(documents.len(), 2);
        let stored_child = documents
            .iter()
            .find(|document| document.id == child)
            .expect("child should be stored");
        assert_eq!(stored_child.parent, Some(parent));
        assert_eq!(stored_child.title, "Child");
        assert!(!stored_child.is_archived);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_nested_documents_when_archived_then_descendants_are_archived() {
        let root = test_temp_dir("archive");
        let store = JsonDocumentStore::new(root.join("documents.json"));
        let parent = store.create("Parent", None).expect("create parent");
        let child = store.create("Child", Some(parent)).expect("create child");
        let grandchild =
            store.create("Grandchild", Some(child)).expect("create grandchild");
        let sibling = store.create("Sibling", None).expect("create sibling");

        store.archive(parent).expect("archive should succeed");

        let documents = store.list().expect("store should list");
        for document in &documents {
            let expected = [parent, child, grandchild].contains(&document.id);
            assert_eq!(document.is_archived, expected);
        }
        assert!(documents.iter().any(|document| document.id == sibling));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_child_of_archived_parent_when_restored_then_it_moves_to_root() {
        let root = test_temp_dir("restore");
        let store = JsonDocumentStore::new(root.join("documents.json"));
        let parent = store.create("Parent", None).expect("create parent");
        let child = store.create("Child", Some(parent)).expect("create child");
        store.archive(parent).expect("archive should succeed");

        store.restore(child).expect("restore should succeed");

        let documents = store.list().expect("store should list");
        let restored = documents
            .iter()
            .find(|document| document.id == child)
            .expect("child should exist");
        assert!(!restored.is_archived);
        assert_eq!(restored.parent, None);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_nested_documents_when_removed_then_descendants_are_deleted() {
        let root = test_temp_dir("remove");
        let store = JsonDocumentStore::new(root.join("documents.json"));
        let parent = store.create("Parent", None).expect("create parent");
        let child = store.create("Child", Some(parent)).expect("create child");
        let other = store.create("Other", None).expect("create other");
        store.archive(parent).expect("archive should succeed");

        store.remove(parent).expect("remove should succeed");

        let ids: Vec<_> = store
            .list()
            .expect("store should list")
            .into_iter()
            .map(|document| document.id)
            .collect();
        assert_eq!(ids, vec![other]);
        assert!(!ids.contains(&child));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unknown_id_when_archived_then_returns_not_found() {
        let root = test_temp_dir("not_found");
        let store = JsonDocumentStore::new(root.join("documents.json"));
        let unknown = DocumentId::new();

        let err = store.archive(unknown).expect_err("archive should fail");

        assert!(matches!(err, DocumentsError::NotFound(id) if id == unknown));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn given_corrupt_file_when_listed_then_returns_json_error() {
        let root = test_temp_dir("corrupt");
        let path = root.join("documents.json");
        fs::write(&path, "{ not json").expect("payload should be written");
        let store = JsonDocumentStore::new(path);

        let err = store.list().expect_err("list should fail");

        assert!(matches!(err, DocumentsError::Json(_)));
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "jotter-documents-{suffix}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&path)
            .expect("temporary directory should be created");
        path
    }
}
