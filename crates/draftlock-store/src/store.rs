use crate::Result;
use draftlock_types::{AppState, DocMode, Document};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DOCS_FILE: &str = "docs.json";
pub const STATE_FILE: &str = "state.json";

/// Outcome of a content mutation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// Destructive edits are blocked while the document is in write mode.
    DeniedWriteMode,
    UnknownDocument,
}

/// Result of resolving a short id prefix against the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMatch {
    Unique(Uuid),
    Ambiguous(usize),
    NotFound,
}

/// Authoritative document collection plus the active pointer.
///
/// All mutations go through this type and it is the sole writer to the two
/// on-disk records. The collection is ordered most-recently-created first.
pub struct DocumentStore {
    data_dir: PathBuf,
    docs: Vec<Document>,
    state: AppState,
}

impl DocumentStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    ///
    /// Missing or unparsable records degrade to an empty collection and
    /// default state. A dangling active pointer is repaired to the first
    /// document.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;

        let docs = read_record(&data_dir.join(DOCS_FILE)).unwrap_or_default();
        let state = read_record(&data_dir.join(STATE_FILE)).unwrap_or_default();

        let mut store = Self {
            data_dir: data_dir.to_path_buf(),
            docs,
            state,
        };
        store.repair_active_pointer();
        Ok(store)
    }

    /// First-run bootstrap: if the collection is empty, create and activate a
    /// blank document. Returns true when a document was created.
    pub fn ensure_first_document(
        &mut self,
        now_ms: i64,
        lock_duration_ms: i64,
    ) -> Result<bool> {
        if !self.docs.is_empty() {
            return Ok(false);
        }
        self.create_document("", now_ms, lock_duration_ms)?;
        Ok(true)
    }

    /// Create a document at the front of the collection and activate it.
    ///
    /// Whether a creation limit applies is the caller's policy, not the
    /// store's.
    pub fn create_document(
        &mut self,
        initial_content: &str,
        now_ms: i64,
        lock_duration_ms: i64,
    ) -> Result<&Document> {
        let doc = Document::new(initial_content, now_ms, lock_duration_ms);
        self.state.doc_id = Some(doc.id);
        self.docs.insert(0, doc);
        self.persist()?;
        Ok(&self.docs[0])
    }

    /// Activate `id`. False (and no state change) when the id is unknown.
    pub fn select_document(&mut self, id: Uuid) -> bool {
        if !self.docs.iter().any(|d| d.id == id) {
            return false;
        }
        self.state.doc_id = Some(id);
        let _ = self.persist();
        true
    }

    /// Remove `id` from the collection. False when the id is unknown.
    ///
    /// When the deleted document was active, the document preceding it in the
    /// list takes over (or the new first element when it was first). An
    /// emptied collection is re-bootstrapped so an active document always
    /// exists.
    pub fn delete_document(
        &mut self,
        id: Uuid,
        now_ms: i64,
        lock_duration_ms: i64,
    ) -> Result<bool> {
        let Some(index) = self.docs.iter().position(|d| d.id == id) else {
            return Ok(false);
        };

        self.docs.remove(index);

        if self.state.doc_id == Some(id) {
            if self.docs.is_empty() {
                self.create_document("", now_ms, lock_duration_ms)?;
                return Ok(true);
            }
            let successor = index.saturating_sub(1).min(self.docs.len() - 1);
            self.state.doc_id = Some(self.docs[successor].id);
        }

        self.persist()?;
        Ok(true)
    }

    /// Append-only write surface: permitted in either mode.
    pub fn append_content(&mut self, id: Uuid, text: &str, now_ms: i64) -> bool {
        let Some(doc) = self.document_mut(id) else {
            return false;
        };
        doc.push_content(text, now_ms);
        let _ = self.persist_documents_only();
        true
    }

    /// Destructive edit surface: replaces the body wholesale, so it is denied
    /// while the document is in write mode.
    pub fn replace_content(&mut self, id: Uuid, text: String, now_ms: i64) -> MutationOutcome {
        let Some(doc) = self.document_mut(id) else {
            return MutationOutcome::UnknownDocument;
        };
        if doc.mode == DocMode::Write {
            return MutationOutcome::DeniedWriteMode;
        }
        doc.set_content(text, now_ms);
        let _ = self.persist_documents_only();
        MutationOutcome::Applied
    }

    /// Resolve a short id prefix (hyphens ignored, case-insensitive).
    pub fn resolve_id(&self, prefix: &str) -> IdMatch {
        let needle: String = prefix
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_lowercase();
        if needle.is_empty() {
            return IdMatch::NotFound;
        }

        let matches: Vec<Uuid> = self
            .docs
            .iter()
            .filter(|d| d.id.simple().to_string().starts_with(&needle))
            .map(|d| d.id)
            .collect();

        match matches.len() {
            0 => IdMatch::NotFound,
            1 => IdMatch::Unique(matches[0]),
            n => IdMatch::Ambiguous(n),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn document(&self, id: Uuid) -> Option<&Document> {
        self.docs.iter().find(|d| d.id == id)
    }

    pub fn document_mut(&mut self, id: Uuid) -> Option<&mut Document> {
        self.docs.iter_mut().find(|d| d.id == id)
    }

    pub fn active_id(&self) -> Option<Uuid> {
        self.state.doc_id
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.state.doc_id.and_then(|id| self.document(id))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Write both records.
    pub fn persist(&self) -> Result<()> {
        self.persist_documents_only()?;
        write_record(&self.data_dir.join(STATE_FILE), &self.state)
    }

    /// Write only the documents record. The high-frequency tick path uses
    /// this so it cannot clobber concurrently-updated application state with
    /// a stale snapshot.
    pub fn persist_documents_only(&self) -> Result<()> {
        write_record(&self.data_dir.join(DOCS_FILE), &self.docs)
    }

    fn repair_active_pointer(&mut self) {
        let valid = self
            .state
            .doc_id
            .is_some_and(|id| self.docs.iter().any(|d| d.id == id));
        if !valid {
            self.state.doc_id = self.docs.first().map(|d| d.id);
        }
    }
}

fn read_record<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

fn write_record<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    std::fs::write(path, raw)?;
    Ok(())
}
