use crate::config::Config;
use draftlock_engine::EditGate;
use draftlock_store::DocumentStore;
use draftlock_types::LockState;
use uuid::Uuid;

/// Outcome of one countdown recomputation against the active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub doc_id: Uuid,
    pub remaining_ms: i64,
    pub unlocked_now: bool,
}

/// Outcome of an edit-mode request, adjudicated against a fresh tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Granted,
    DeniedLocked { remaining_ms: i64 },
    NoActiveDocument,
}

/// Binds the store to the lock engine: resolves the active document fresh on
/// every operation and persists the recomputed timer fields.
///
/// Persistence on the timer paths is best-effort; the in-memory state is the
/// session's source of truth and a failed write only risks state across
/// restarts.
pub struct LockController<'a> {
    store: &'a mut DocumentStore,
    config: &'a Config,
}

impl<'a> LockController<'a> {
    pub fn new(store: &'a mut DocumentStore, config: &'a Config) -> Self {
        Self { store, config }
    }

    /// Recompute the active document's countdown and persist the documents
    /// record. `None` when there is no active document at the moment of
    /// writing (deleted or deselected since the tick was scheduled).
    pub fn tick_active(&mut self, now_ms: i64) -> Option<TickReport> {
        let id = self.store.active_id()?;
        let doc = self.store.document_mut(id)?;
        let tick = draftlock_engine::tick(doc, now_ms, self.config.lock_duration_ms);
        let _ = self.store.persist_documents_only();
        Some(TickReport {
            doc_id: id,
            remaining_ms: tick.remaining_ms,
            unlocked_now: tick.unlocked_now,
        })
    }

    /// Attribute elapsed surface time to the active document's current mode.
    /// The next tick's write carries the counters to disk.
    pub fn accrue_active(&mut self, delta_ms: i64) {
        let Some(id) = self.store.active_id() else {
            return;
        };
        if let Some(doc) = self.store.document_mut(id) {
            draftlock_engine::accrue_mode_time(doc, delta_ms);
        }
    }

    /// Visibility-resume sequence: tick from the untouched anchor so hidden
    /// wall-clock time counts fully, then re-anchor and persist immediately,
    /// before any further tick can land.
    pub fn resume_after_hidden(&mut self, now_ms: i64) -> Option<i64> {
        let id = self.store.active_id()?;
        let doc = self.store.document_mut(id)?;
        let tick = draftlock_engine::tick(doc, now_ms, self.config.lock_duration_ms);
        draftlock_engine::reanchor_after_hidden(doc, now_ms, self.config.lock_duration_ms);
        let _ = self.store.persist_documents_only();
        Some(tick.remaining_ms)
    }

    /// Gate the active document into edit mode. Adjudicates against a fresh
    /// tick so a countdown that expired since the last tick is honored.
    /// The confirmation ritual is the caller's business; a locked document is
    /// denied regardless.
    pub fn enter_edit_mode(&mut self, now_ms: i64) -> EditOutcome {
        let Some(report) = self.tick_active(now_ms) else {
            return EditOutcome::NoActiveDocument;
        };
        let Some(doc) = self.store.document_mut(report.doc_id) else {
            return EditOutcome::NoActiveDocument;
        };
        match draftlock_engine::enter_edit(doc) {
            EditGate::Granted => {
                let _ = self.store.persist_documents_only();
                EditOutcome::Granted
            }
            EditGate::Denied(_) => EditOutcome::DeniedLocked {
                remaining_ms: report.remaining_ms,
            },
        }
    }

    /// Return the active document to write mode. Never restarts the lock;
    /// reports the write sub-state consistent with the current countdown.
    pub fn enter_write_mode(&mut self, now_ms: i64) -> Option<LockState> {
        let report = self.tick_active(now_ms)?;
        let doc = self.store.document_mut(report.doc_id)?;
        draftlock_engine::enter_write(doc);
        let state = draftlock_engine::lock_state(doc);
        let _ = self.store.persist_documents_only();
        Some(state)
    }
}
