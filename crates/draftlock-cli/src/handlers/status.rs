use crate::presentation::{console, presenters};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use draftlock_runtime::Draftlock;
use draftlock_types::epoch_ms_now;

pub fn handle(workspace: &mut Draftlock, format: OutputFormat) -> Result<()> {
    // Tick-then-report: the countdown is brought up to date (and persisted)
    // as part of reading it.
    workspace.controller().tick_active(epoch_ms_now());

    let doc = workspace
        .store()
        .active_document()
        .context("no active document")?;
    let view = presenters::present_status(doc, workspace.store().len());

    match format {
        OutputFormat::Json => console::emit_json(&view),
        OutputFormat::Plain => {
            console::render_status(&view);
            Ok(())
        }
    }
}
