use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DocRowViewModel {
    pub id: String,
    pub short_id: String,
    pub title: String,
    pub mode: String,
    pub lock: String,
    pub remaining_ms: i64,
    pub active: bool,
    pub minutes_in_mode: String,
    pub updated: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocListViewModel {
    pub documents: Vec<DocRowViewModel>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusViewModel {
    pub id: String,
    pub short_id: String,
    pub title: String,
    pub mode: String,
    pub lock_state: String,
    pub lock_active: bool,
    pub remaining_ms: i64,
    pub remaining: String,
    pub ms_write: i64,
    pub ms_edit: i64,
    pub created: i64,
    pub updated: i64,
    pub documents: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedViewModel {
    pub id: String,
    pub short_id: String,
    pub title: String,
    pub remaining_ms: i64,
    pub documents: usize,
    pub max_documents: usize,
}

/// Streamed line-per-event shape for `watch --format json`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WatchEventViewModel {
    Tick { remaining_ms: i64, remaining: String },
    Unlocked,
    Suspended,
    Resumed { remaining_ms: i64 },
    Stopped { reason: String },
}
