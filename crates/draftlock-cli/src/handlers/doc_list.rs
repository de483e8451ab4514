use crate::presentation::{console, presenters};
use crate::types::OutputFormat;
use anyhow::Result;
use draftlock_runtime::Draftlock;
use draftlock_types::epoch_ms_now;

pub fn handle(workspace: &mut Draftlock, limit: usize, format: OutputFormat) -> Result<()> {
    // Bring the active document's countdown up to date before rendering.
    let now = epoch_ms_now();
    workspace.controller().tick_active(now);

    let view = presenters::present_doc_list(
        workspace.store().documents(),
        workspace.store().active_id(),
        limit,
        now,
    );

    match format {
        OutputFormat::Json => console::emit_json(&view),
        OutputFormat::Plain => {
            console::render_doc_list(&view);
            Ok(())
        }
    }
}
