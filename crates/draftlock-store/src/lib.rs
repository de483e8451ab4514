// NOTE: draftlock-store Persistence Rationale
//
// Why two records (docs.json + state.json)?
// - The documents record is rewritten on every timer tick; the state record
//   only changes on explicit user intent (select, prompt bookkeeping)
// - A high-frequency documents-only write must never clobber application
//   state with a stale snapshot, so the records live under separate keys
//
// Why degrade-to-default on read failure?
// - The in-memory collection is the authoritative source of truth for the
//   current session; a corrupt or missing record only costs history, not
//   within-session correctness
// - Loading therefore never raises: absent and unparsable records both fall
//   back to an empty collection and default state
//
// Why are denials return values, not errors?
// - A revision blocked by write mode and an unknown id are expected domain
//   outcomes; callers branch on them, the process never aborts

mod error;
mod store;

pub use error::{Error, Result};
pub use store::{DOCS_FILE, DocumentStore, IdMatch, MutationOutcome, STATE_FILE};
