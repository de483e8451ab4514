use super::text_or_stdin;
use anyhow::{Context, Result, bail};
use draftlock_runtime::Draftlock;
use draftlock_types::epoch_ms_now;

pub fn handle(workspace: &mut Draftlock, text: Option<&str>, newline: bool) -> Result<()> {
    let mut text = text_or_stdin(text)?;
    if newline {
        text.insert(0, '\n');
    }
    if text.is_empty() {
        bail!("nothing to append");
    }

    let id = workspace
        .store()
        .active_id()
        .context("no active document")?;
    let chars = text.chars().count();

    if !workspace.store_mut().append_content(id, &text, epoch_ms_now()) {
        bail!("no active document");
    }

    if let Some(doc) = workspace.store().document(id) {
        println!("Appended {} chars to {}", chars, doc.title);
    }
    Ok(())
}
