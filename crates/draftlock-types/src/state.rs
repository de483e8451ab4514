use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Application-level state persisted alongside the document collection.
///
/// The core only owns the active-document pointer. Presentation layers may
/// piggyback their own bookkeeping (e.g. the confirmation-prompt phrase
/// index) in the same record; unknown keys round-trip through `extra` so a
/// documents-only write never has to touch them and a full write never drops
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(rename = "docId", default)]
    pub doc_id: Option<Uuid>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AppState {
    pub fn get_extra(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    pub fn set_extra(&mut self, key: &str, value: serde_json::Value) {
        self.extra.insert(key.to_string(), value);
    }
}
