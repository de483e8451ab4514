use super::resolve_id_arg;
use anyhow::{Result, bail};
use draftlock_runtime::Draftlock;
use draftlock_types::{epoch_ms_now, short_id};

pub fn handle(workspace: &mut Draftlock, id_arg: &str) -> Result<()> {
    let id = resolve_id_arg(workspace, id_arg)?;
    let lock_duration_ms = workspace.config().lock_duration_ms;

    if !workspace
        .store_mut()
        .delete_document(id, epoch_ms_now(), lock_duration_ms)?
    {
        bail!("no document matches id '{}'", id_arg);
    }

    println!("Deleted {}", short_id(&id));
    if let Some(doc) = workspace.store().active_document() {
        println!("Active document: {} ({})", short_id(&doc.id), doc.title);
    }
    Ok(())
}
