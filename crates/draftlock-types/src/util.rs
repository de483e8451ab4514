use uuid::Uuid;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn epoch_ms_now() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Short display form of a document id (first 8 hex characters).
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
