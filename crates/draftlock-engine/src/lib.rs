// NOTE: draftlock-engine Design Rationale
//
// Why pure functions (no clock, no I/O)?
// - The lock is wall-clock-based and must survive process restarts, so the
//   authoritative input is always an explicit `now_ms` supplied by the caller
// - Deterministic inputs make every timing edge case unit-testable without
//   sleeping
// - Persistence stays the store's job; the engine only rewrites fields on the
//   document it is handed
//
// Why derive remaining time from the anchor (not count down a duration)?
// - A stored duration drifts whenever ticking is suspended or the process dies
// - `remaining = duration - (now - anchor)` is exact regardless of how many
//   ticks were missed
// - The cached `remaining_ms` exists only so a restart mid-countdown can
//   resume without the interval having been running

mod lock;

pub use lock::{
    DenyReason, EditGate, Tick, accrue_mode_time, enter_edit, enter_write, lock_state,
    reanchor_after_hidden, tick,
};
