mod errors;
mod event;
mod feature;
mod model;
mod state;
mod storage;

#[allow(unused_imports)]
pub(crate) use errors::DocumentsError;
pub(crate) use event::DocumentsEvent;
pub(crate) use feature::{DocumentsCtx, DocumentsFeature};
pub(crate) use model::{Document, DocumentId, DocumentRow};
pub(crate) use storage::{JsonDocumentStore, SharedDocumentStore};
