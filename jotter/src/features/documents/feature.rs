use std::sync::Arc;

use iced::Task;

use super::errors::DocumentsError;
use super::event::DocumentsEvent;
use super::model::{Document, DocumentId, DocumentOp, DocumentRow};
use super::state::{DocumentsState, PendingOperation};
use super::storage::{DocumentStore, SharedDocumentStore};
use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::toast::{ToastEvent, ToastKey};
use crate::state::Route;

type StoreMutation =
    fn(&dyn DocumentStore, DocumentId) -> Result<(), DocumentsError>;

/// Follow-up of a finished store operation.
#[derive(Debug)]
pub(crate) struct Settled {
    /// Toast replacing the pending one.
    pub(crate) notice: ToastEvent,
    pub(crate) reload: bool,
    /// Navigate away because the open document left the tree.
    pub(crate) close_open: bool,
}

/// Runtime context required by the documents reducer.
pub(crate) struct DocumentsCtx {
    /// Document shown in the main area, if any.
    pub(crate) open_document: Option<DocumentId>,
}

/// Documents feature root that owns the tree state and the store handle.
pub(crate) struct DocumentsFeature {
    state: DocumentsState,
    store: SharedDocumentStore,
}

impl DocumentsFeature {
    pub(crate) fn new(store: SharedDocumentStore) -> Self {
        Self {
            state: DocumentsState::default(),
            store,
        }
    }

    /// Return flattened rows of the visible document tree.
    pub(crate) fn rows(&self) -> &[DocumentRow] {
        self.state.rows()
    }

    /// Return archived documents filtered by the trash search.
    pub(crate) fn trashed(&self) -> Vec<&Document> {
        self.state.trashed()
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Return whether the spinner should be shown.
    pub(crate) fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub(crate) fn is_trash_open(&self) -> bool {
        self.state.is_trash_open()
    }

    pub(crate) fn trash_search(&self) -> &str {
        self.state.trash_search()
    }

    /// Return the document with the given id.
    pub(crate) fn document(&self, id: DocumentId) -> Option<&Document> {
        self.state.find(id)
    }

    fn request_create(
        &mut self,
        title: String,
        parent: Option<DocumentId>,
    ) -> Task<AppEvent> {
        let op = self.state.begin_operation(PendingOperation {
            op: DocumentOp::Create,
            target: parent,
            closes_open: false,
        });
        let store = Arc::clone(&self.store);

        let pending = Task::done(AppEvent::Toast(ToastEvent::pending(
            ToastKey::Operation(op),
            DocumentOp::Create.pending_message(),
        )));
        let create = Task::perform(
            async move {
                store.create(&title, parent).map_err(|err| format!("{err}"))
            },
            move |result| {
                AppEvent::Documents(DocumentsEvent::Created { op, result })
            },
        );

        Task::batch([pending, create])
    }

    /// Resolve a finished create. Returns `None` for unknown requests.
    pub(crate) fn settle_create(
        &mut self,
        op: u64,
        result: Result<DocumentId, String>,
    ) -> Option<Settled> {
        let Some(pending) = self.state.finish_operation(op) else {
            log::warn!("document create {op} finished without a request");
            return None;
        };

        let notice = operation_notice(op, pending.op, result.is_ok());
        let reload = match result {
            Ok(id) => {
                log::info!("document {id} created");
                if let Some(parent) = pending.target {
                    self.state.expand(parent);
                }
                true
            },
            Err(message) => {
                log::warn!("document create failed: {message}");
                false
            },
        };

        Some(Settled {
            notice,
            reload,
            close_open: false,
        })
    }

    fn request_mutation(
        &mut self,
        op: DocumentOp,
        id: DocumentId,
        ctx: &DocumentsCtx,
        mutation: StoreMutation,
    ) -> Task<AppEvent> {
        let closes = matches!(op, DocumentOp::Archive | DocumentOp::Remove);
        let closes_open = closes
            && ctx
                .open_document
                .is_some_and(|open| self.state.is_within(open, id));
        let request = self.state.begin_operation(PendingOperation {
            op,
            target: Some(id),
            closes_open,
        });
        let store = Arc::clone(&self.store);

        let pending = Task::done(AppEvent::Toast(ToastEvent::pending(
            ToastKey::Operation(request),
            op.pending_message(),
        )));
        let mutate = Task::perform(
            async move {
                mutation(store.as_ref(), id).map_err(|err| format!("{err}"))
            },
            move |result| {
                AppEvent::Documents(DocumentsEvent::Mutated {
                    op: request,
                    result,
                })
            },
        );

        Task::batch([pending, mutate])
    }

    /// Resolve a finished archive, restore or remove.
    pub(crate) fn settle_mutation(
        &mut self,
        op: u64,
        result: Result<(), String>,
    ) -> Option<Settled> {
        let Some(pending) = self.state.finish_operation(op) else {
            log::warn!("document mutation {op} finished without a request");
            return None;
        };

        let notice = operation_notice(op, pending.op, result.is_ok());
        if let Err(message) = result {
            log::warn!("document {:?} failed: {message}", pending.op);
            return Some(Settled {
                notice,
                reload: false,
                close_open: false,
            });
        }

        Some(Settled {
            notice,
            reload: true,
            close_open: pending.closes_open,
        })
    }

    fn request_load(&mut self) -> Task<AppEvent> {
        let generation = self.state.begin_load();
        let store = Arc::clone(&self.store);

        Task::perform(async move { store.list() }, move |result| {
            let event = match result {
                Ok(documents) => DocumentsEvent::Loaded {
                    generation,
                    documents,
                },
                Err(err) => DocumentsEvent::LoadFailed(format!("{err}")),
            };
            AppEvent::Documents(event)
        })
    }

    fn follow_up(&mut self, settled: Option<Settled>) -> Task<AppEvent> {
        let Some(settled) = settled else {
            return Task::none();
        };

        let mut tasks = vec![Task::done(AppEvent::Toast(settled.notice))];
        if settled.reload {
            tasks.push(self.request_load());
        }
        if settled.close_open {
            tasks.push(Task::done(AppEvent::Navigate(Route::Documents)));
        }
        Task::batch(tasks)
    }
}

impl Feature for DocumentsFeature {
    type Event = DocumentsEvent;
    type Ctx<'a> = DocumentsCtx;

    fn reduce<'a>(
        &mut self,
        event: DocumentsEvent,
        ctx: &DocumentsCtx,
    ) -> Task<AppEvent> {
        match event {
            DocumentsEvent::Load => self.request_load(),
            DocumentsEvent::Loaded {
                generation,
                documents,
            } => {
                let count = documents.len();
                if self.state.apply_snapshot(generation, documents) {
                    log::debug!("loaded {count} documents");
                } else {
                    log::debug!("dropped stale document list {generation}");
                }
                Task::none()
            },
            DocumentsEvent::LoadFailed(message) => {
                log::warn!("document list read failed: {message}");
                self.state.mark_loaded();
                Task::none()
            },
            DocumentsEvent::Create { title, parent } => {
                self.request_create(title, parent)
            },
            DocumentsEvent::Created { op, result } => {
                let settled = self.settle_create(op, result);
                self.follow_up(settled)
            },
            DocumentsEvent::ToggleExpanded(id) => {
                self.state.toggle_expanded(id);
                Task::none()
            },
            DocumentsEvent::Open(id) => {
                self.state.close_trash();
                Task::done(AppEvent::Navigate(Route::Document(id)))
            },
            DocumentsEvent::Archive(id) => self.request_mutation(
                DocumentOp::Archive,
                id,
                ctx,
                |store, id| store.archive(id),
            ),
            DocumentsEvent::Restore(id) => self.request_mutation(
                DocumentOp::Restore,
                id,
                ctx,
                |store, id| store.restore(id),
            ),
            DocumentsEvent::Remove(id) => self.request_mutation(
                DocumentOp::Remove,
                id,
                ctx,
                |store, id| store.remove(id),
            ),
            DocumentsEvent::Mutated { op, result } => {
                let settled = self.settle_mutation(op, result);
                self.follow_up(settled)
            },
            DocumentsEvent::ToggleTrash => {
                self.state.toggle_trash();
                Task::none()
            },
            DocumentsEvent::CloseTrash => {
                self.state.close_trash();
                Task::none()
            },
            DocumentsEvent::TrashSearchChanged(value) => {
                self.state.set_trash_search(value);
                Task::none()
            },
        }
    }
}

/// Build the toast that resolves a finished store operation.
pub(crate) fn operation_notice(
    request: u64,
    op: DocumentOp,
    succeeded: bool,
) -> ToastEvent {
    let key = ToastKey::Operation(request);
    if succeeded {
        ToastEvent::success(key, op.success_message())
    } else {
        ToastEvent::error(key, op.error_message())
    }
}
