use super::formatters::{format_minutes_in_mode, format_relative_ms, format_remaining};
use super::view_models::{
    CreatedViewModel, DocListViewModel, DocRowViewModel, StatusViewModel, WatchEventViewModel,
};
use draftlock_runtime::{StopReason, TickerEvent};
use draftlock_types::{Document, short_id};
use uuid::Uuid;

pub fn present_doc_row(doc: &Document, active_id: Option<Uuid>, now_ms: i64) -> DocRowViewModel {
    DocRowViewModel {
        id: doc.id.to_string(),
        short_id: short_id(&doc.id),
        title: doc.title.clone(),
        mode: doc.mode.to_string(),
        lock: if doc.lock_active {
            format!("locked {}", format_remaining(doc.remaining_ms))
        } else {
            "unlocked".to_string()
        },
        remaining_ms: doc.remaining_ms,
        active: active_id == Some(doc.id),
        minutes_in_mode: format_minutes_in_mode(doc.ms_write, doc.ms_edit),
        updated: format_relative_ms(doc.updated, now_ms),
    }
}

pub fn present_doc_list(
    docs: &[Document],
    active_id: Option<Uuid>,
    limit: usize,
    now_ms: i64,
) -> DocListViewModel {
    DocListViewModel {
        documents: docs
            .iter()
            .take(limit)
            .map(|doc| present_doc_row(doc, active_id, now_ms))
            .collect(),
        total: docs.len(),
    }
}

pub fn present_status(doc: &Document, total: usize) -> StatusViewModel {
    let lock_state = draftlock_engine::lock_state(doc);
    StatusViewModel {
        id: doc.id.to_string(),
        short_id: short_id(&doc.id),
        title: doc.title.clone(),
        mode: doc.mode.to_string(),
        lock_state: lock_state.to_string(),
        lock_active: doc.lock_active,
        remaining_ms: doc.remaining_ms,
        remaining: format_remaining(doc.remaining_ms),
        ms_write: doc.ms_write,
        ms_edit: doc.ms_edit,
        created: doc.created,
        updated: doc.updated,
        documents: total,
    }
}

pub fn present_created(doc: &Document, total: usize, max_documents: usize) -> CreatedViewModel {
    CreatedViewModel {
        id: doc.id.to_string(),
        short_id: short_id(&doc.id),
        title: doc.title.clone(),
        remaining_ms: doc.remaining_ms,
        documents: total,
        max_documents,
    }
}

pub fn present_watch_event(event: &TickerEvent) -> WatchEventViewModel {
    match event {
        TickerEvent::Tick { remaining_ms } => WatchEventViewModel::Tick {
            remaining_ms: *remaining_ms,
            remaining: format_remaining(*remaining_ms),
        },
        TickerEvent::Unlocked => WatchEventViewModel::Unlocked,
        TickerEvent::Suspended => WatchEventViewModel::Suspended,
        TickerEvent::Resumed { remaining_ms } => WatchEventViewModel::Resumed {
            remaining_ms: *remaining_ms,
        },
        TickerEvent::Stopped { reason } => WatchEventViewModel::Stopped {
            reason: match reason {
                StopReason::Unlocked => "unlocked".to_string(),
                StopReason::NoActiveDocument => "no_active_document".to_string(),
                StopReason::Requested => "requested".to_string(),
            },
        },
    }
}
