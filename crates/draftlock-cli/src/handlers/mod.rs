pub mod append;
pub mod doc_delete;
pub mod doc_list;
pub mod doc_new;
pub mod doc_select;
pub mod doc_show;
pub mod export;
pub mod mode_edit;
pub mod mode_write;
pub mod revise;
pub mod status;
pub mod watch;

use anyhow::{Result, bail};
use draftlock_runtime::Draftlock;
use draftlock_store::IdMatch;
use uuid::Uuid;

/// Resolve a user-supplied id prefix or fail with an actionable message.
fn resolve_id_arg(workspace: &Draftlock, prefix: &str) -> Result<Uuid> {
    match workspace.store().resolve_id(prefix) {
        IdMatch::Unique(id) => Ok(id),
        IdMatch::Ambiguous(n) => bail!(
            "id prefix '{}' is ambiguous ({} documents match); use more characters",
            prefix,
            n
        ),
        IdMatch::NotFound => bail!("no document matches id '{}'", prefix),
    }
}

/// Text argument or stdin when omitted.
fn text_or_stdin(text: Option<&str>) -> Result<String> {
    match text {
        Some(t) => Ok(t.to_string()),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}
