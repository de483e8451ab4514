use crate::title::derive_title;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Which editing surface a document currently exposes.
///
/// `Write` permits only additive input; destructive mutations are denied by
/// the store. `Edit` permits full revision and is only reachable after the
/// write lock has expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocMode {
    Write,
    Edit,
}

impl fmt::Display for DocMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocMode::Write => write!(f, "write"),
            DocMode::Edit => write!(f, "edit"),
        }
    }
}

/// Derived lock phase of a document: (`mode`, `lock_active`) collapsed into
/// the three states the rest of the system reasons about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockState {
    WriteLocked,
    WriteUnlocked,
    Edit,
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockState::WriteLocked => write!(f, "locked"),
            LockState::WriteUnlocked => write!(f, "unlocked"),
            LockState::Edit => write!(f, "edit"),
        }
    }
}

/// A single draft and its lock bookkeeping.
///
/// Serialized with camelCase keys so the on-disk records keep the original
/// schema (`lockActive`, `writeLockStarted`, ...). All timestamps are
/// milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub mode: DocMode,
    pub lock_active: bool,
    /// Anchor of the current countdown. Re-anchored on visibility resume,
    /// never merely paused.
    pub write_lock_started: i64,
    /// Cached countdown so a reload mid-countdown resumes without the timer
    /// having been running.
    pub remaining_ms: i64,
    pub ms_write: i64,
    pub ms_edit: i64,
    pub created: i64,
    pub updated: i64,
}

impl Document {
    /// A fresh document: write mode, lock armed, countdown at full duration.
    pub fn new(content: &str, now_ms: i64, lock_duration_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: derive_title(content),
            content: content.to_string(),
            mode: DocMode::Write,
            lock_active: true,
            write_lock_started: now_ms,
            remaining_ms: lock_duration_ms,
            ms_write: 0,
            ms_edit: 0,
            created: now_ms,
            updated: now_ms,
        }
    }

    /// Replace the body, re-derive the cached title, touch `updated`.
    pub fn set_content(&mut self, content: String, now_ms: i64) {
        self.content = content;
        self.title = derive_title(&self.content);
        self.updated = now_ms;
    }

    /// Append to the body, re-derive the cached title, touch `updated`.
    pub fn push_content(&mut self, text: &str, now_ms: i64) {
        self.content.push_str(text);
        self.title = derive_title(&self.content);
        self.updated = now_ms;
    }
}
