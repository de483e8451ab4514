use super::view_models::{CreatedViewModel, DocListViewModel, StatusViewModel};
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn render_doc_list(view: &DocListViewModel) {
    if view.documents.is_empty() {
        println!("No documents.");
        return;
    }

    println!(
        "  {:<10} {:<26} {:<6} {:<14} {:<8} UPDATED",
        "ID", "TITLE", "MODE", "LOCK", "TIME"
    );
    for row in &view.documents {
        let marker = if row.active { "*" } else { " " };
        let line = format!(
            "{} {:<10} {:<26} {:<6} {:<14} {:<8} {}",
            marker, row.short_id, row.title, row.mode, row.lock, row.minutes_in_mode, row.updated
        );
        if row.active {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
    if view.total > view.documents.len() {
        println!("  ... {} more (use --limit)", view.total - view.documents.len());
    }
}

pub fn render_status(view: &StatusViewModel) {
    println!("Document:  {} ({})", view.title, view.short_id);
    println!("Mode:      {}", view.mode);
    if view.lock_active {
        println!("Lock:      {} remaining", view.remaining.red());
    } else {
        println!("Lock:      {}", "released".green());
    }
    println!(
        "Time:      {} in write, {} in edit",
        super::formatters::format_remaining(view.ms_write),
        super::formatters::format_remaining(view.ms_edit)
    );
    println!("Documents: {}", view.documents);
}

pub fn render_created(view: &CreatedViewModel) {
    println!("Created document {} ({})", view.short_id, view.title);
    println!(
        "Write lock armed: {}",
        super::formatters::format_remaining(view.remaining_ms)
    );
    println!("{}/{} documents", view.documents, view.max_documents);
}
