use super::resolve_id_arg;
use anyhow::{Context, Result};
use draftlock_runtime::Draftlock;

pub fn handle(workspace: &Draftlock, id_arg: Option<&str>) -> Result<()> {
    let doc = match id_arg {
        Some(prefix) => {
            let id = resolve_id_arg(workspace, prefix)?;
            workspace
                .store()
                .document(id)
                .context("document disappeared while resolving")?
        }
        None => workspace
            .store()
            .active_document()
            .context("no active document")?,
    };

    print!("{}", doc.content);
    if !doc.content.is_empty() && !doc.content.ends_with('\n') {
        println!();
    }
    Ok(())
}
