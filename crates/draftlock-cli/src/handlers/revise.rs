use super::text_or_stdin;
use anyhow::{Context, Result, bail};
use draftlock_runtime::Draftlock;
use draftlock_store::MutationOutcome;
use draftlock_types::epoch_ms_now;

pub fn handle(workspace: &mut Draftlock, text: Option<&str>) -> Result<()> {
    let text = text_or_stdin(text)?;
    let id = workspace
        .store()
        .active_id()
        .context("no active document")?;

    match workspace
        .store_mut()
        .replace_content(id, text, epoch_ms_now())
    {
        MutationOutcome::Applied => {
            if let Some(doc) = workspace.store().document(id) {
                println!("Revised {}", doc.title);
            }
            Ok(())
        }
        MutationOutcome::DeniedWriteMode => {
            bail!("document is in write mode; destructive edits are blocked (try 'draftlock mode edit')")
        }
        MutationOutcome::UnknownDocument => bail!("no active document"),
    }
}
