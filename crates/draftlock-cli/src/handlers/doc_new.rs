use crate::presentation::{console, presenters};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use draftlock_runtime::Draftlock;
use draftlock_types::epoch_ms_now;

pub fn handle(workspace: &mut Draftlock, content: Option<&str>, format: OutputFormat) -> Result<()> {
    let max_documents = workspace.config().max_documents;
    if workspace.store().len() >= max_documents {
        bail!(
            "document limit reached ({} documents); delete one first",
            max_documents
        );
    }

    let lock_duration_ms = workspace.config().lock_duration_ms;
    let doc = workspace
        .store_mut()
        .create_document(content.unwrap_or(""), epoch_ms_now(), lock_duration_ms)?
        .clone();
    let view = presenters::present_created(&doc, workspace.store().len(), max_documents);

    match format {
        OutputFormat::Json => console::emit_json(&view),
        OutputFormat::Plain => {
            console::render_created(&view);
            Ok(())
        }
    }
}
