use super::resolve_id_arg;
use anyhow::{Result, bail};
use draftlock_runtime::Draftlock;
use draftlock_types::short_id;

pub fn handle(workspace: &mut Draftlock, id_arg: &str) -> Result<()> {
    let id = resolve_id_arg(workspace, id_arg)?;

    if !workspace.store_mut().select_document(id) {
        bail!("no document matches id '{}'", id_arg);
    }

    // A pending confirmation challenge belongs to the previous selection.
    super::mode_edit::clear_challenge(workspace);

    if let Some(doc) = workspace.store().active_document() {
        println!("Selected {} ({})", short_id(&doc.id), doc.title);
    }
    Ok(())
}
