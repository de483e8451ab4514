use super::mode_edit::clear_challenge;
use crate::presentation::formatters::format_remaining;
use anyhow::{Result, bail};
use draftlock_runtime::Draftlock;
use draftlock_types::{LockState, epoch_ms_now};

pub fn handle(workspace: &mut Draftlock) -> Result<()> {
    let Some(state) = workspace.controller().enter_write_mode(epoch_ms_now()) else {
        bail!("no active document");
    };

    clear_challenge(workspace);

    match state {
        LockState::WriteLocked => {
            let remaining = workspace
                .store()
                .active_document()
                .map(|doc| doc.remaining_ms)
                .unwrap_or(0);
            println!(
                "Write mode (lock still active, {} remaining)",
                format_remaining(remaining)
            );
        }
        _ => println!("Write mode"),
    }
    Ok(())
}
