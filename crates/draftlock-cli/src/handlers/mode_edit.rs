use crate::presentation::formatters::format_remaining;
use anyhow::{Context, Result, bail};
use draftlock_runtime::{Draftlock, EditOutcome};
use draftlock_types::{DocMode, epoch_ms_now};
use is_terminal::IsTerminal;
use rand::Rng;
use serde_json::json;
use std::io::Write;

/// Phrases for the typed confirmation ritual.
const EDIT_PHRASES: [&str; 8] = [
    "I will edit with intention",
    "No accidental changes",
    "Edit mode is for revision",
    "I accept the risk",
    "Intentional editing only",
    "I am ready to edit",
    "Edit mode unlock",
    "Proceed to edit",
];

// Challenge bookkeeping lives in the state record's pass-through fields,
// keeping the original schema's key names.
const PHRASE_INDEX_KEY: &str = "editPhraseIndex";
const CHALLENGE_OPEN_KEY: &str = "editModalOpen";

pub fn handle(workspace: &mut Draftlock, confirm: Option<&str>) -> Result<()> {
    // Fresh adjudication before the ritual so nobody types a phrase at a
    // locked door.
    let now = epoch_ms_now();
    let report = workspace
        .controller()
        .tick_active(now)
        .context("no active document")?;
    if report.remaining_ms > 0 {
        bail!(
            "write lock active: {} remaining",
            format_remaining(report.remaining_ms)
        );
    }

    if workspace
        .store()
        .active_document()
        .is_some_and(|doc| doc.mode == DocMode::Edit)
    {
        println!("Already in edit mode");
        return Ok(());
    }

    match confirm {
        Some(typed) => {
            let Some(expected) = pending_phrase(workspace) else {
                let phrase = issue_challenge(workspace);
                println!("Confirmation phrase: {}", phrase);
                println!("Re-run with: draftlock mode edit --confirm \"{}\"", phrase);
                bail!("no confirmation was pending; a new phrase has been issued");
            };
            if typed.trim() != expected {
                bail!("confirmation phrase does not match");
            }
        }
        None => {
            let phrase = issue_challenge(workspace);
            println!("Confirmation phrase: {}", phrase);
            if std::io::stdin().is_terminal() {
                print!("Type the phrase to confirm: ");
                std::io::stdout().flush()?;
                let mut line = String::new();
                std::io::stdin().read_line(&mut line)?;
                if line.trim() != phrase {
                    bail!("confirmation phrase does not match");
                }
            } else {
                println!("Re-run with: draftlock mode edit --confirm \"{}\"", phrase);
                bail!("confirmation required");
            }
        }
    }

    // The ritual passed; the gate still re-checks the lock on its own tick.
    match workspace.controller().enter_edit_mode(epoch_ms_now()) {
        EditOutcome::Granted => {
            clear_challenge(workspace);
            if let Some(doc) = workspace.store().active_document() {
                println!("Edit mode unlocked for {}", doc.title);
            }
            Ok(())
        }
        EditOutcome::DeniedLocked { remaining_ms } => bail!(
            "write lock active: {} remaining",
            format_remaining(remaining_ms)
        ),
        EditOutcome::NoActiveDocument => bail!("no active document"),
    }
}

fn pending_phrase(workspace: &Draftlock) -> Option<&'static str> {
    let state = workspace.store().state();
    if !state.get_extra(CHALLENGE_OPEN_KEY)?.as_bool()? {
        return None;
    }
    let index = state.get_extra(PHRASE_INDEX_KEY)?.as_u64()? as usize;
    EDIT_PHRASES.get(index).copied()
}

fn issue_challenge(workspace: &mut Draftlock) -> &'static str {
    let index = rand::rng().random_range(0..EDIT_PHRASES.len());
    let state = workspace.store_mut().state_mut();
    state.set_extra(PHRASE_INDEX_KEY, json!(index));
    state.set_extra(CHALLENGE_OPEN_KEY, json!(true));
    let _ = workspace.store().persist();
    EDIT_PHRASES[index]
}

/// Drop any pending challenge; called on success and whenever the selection
/// or mode changes out from under it.
pub(crate) fn clear_challenge(workspace: &mut Draftlock) {
    let state = workspace.store_mut().state_mut();
    if state
        .get_extra(CHALLENGE_OPEN_KEY)
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
    {
        state.set_extra(CHALLENGE_OPEN_KEY, json!(false));
        let _ = workspace.store().persist();
    }
}
