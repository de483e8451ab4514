use draftlock_types::{DocMode, Document, LockState};
use serde::Serialize;

/// Result of a single countdown recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub remaining_ms: i64,
    /// True only on the tick that cleared `lock_active` (one-shot).
    pub unlocked_now: bool,
}

/// Outcome of an edit-mode request. A denial carries no state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EditGate {
    Granted,
    Denied(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    LockActive,
}

/// Collapse (`mode`, `lock_active`) into the lock phase.
pub fn lock_state(doc: &Document) -> LockState {
    match (doc.mode, doc.lock_active) {
        (DocMode::Edit, _) => LockState::Edit,
        (DocMode::Write, true) => LockState::WriteLocked,
        (DocMode::Write, false) => LockState::WriteUnlocked,
    }
}

/// Recompute the countdown from the stored anchor.
///
/// No-op once the lock has expired: the unlock is one-shot and nothing ever
/// re-arms it. `remaining_ms` is clamped so it never increases, even if the
/// wall clock moved backwards between ticks.
pub fn tick(doc: &mut Document, now_ms: i64, lock_duration_ms: i64) -> Tick {
    if !doc.lock_active {
        return Tick {
            remaining_ms: doc.remaining_ms,
            unlocked_now: false,
        };
    }

    let elapsed = now_ms - doc.write_lock_started;
    let remaining = (lock_duration_ms - elapsed).max(0).min(doc.remaining_ms);
    doc.remaining_ms = remaining;

    let unlocked_now = remaining == 0;
    if unlocked_now {
        doc.lock_active = false;
    }

    Tick {
        remaining_ms: remaining,
        unlocked_now,
    }
}

/// Re-anchor the countdown so the anchor agrees with the current
/// `remaining_ms`: `write_lock_started = now - (duration - remaining)`.
///
/// Resume sequence after the surface was hidden: tick first (ticking was
/// suspended, not compensated, so the stale anchor is what makes hidden
/// wall-clock time count), then re-anchor, then persist before any further
/// tick. After the re-anchor the resumed countdown is mathematically
/// equivalent to one that had kept running.
pub fn reanchor_after_hidden(doc: &mut Document, now_ms: i64, lock_duration_ms: i64) {
    if !doc.lock_active {
        return;
    }
    doc.write_lock_started = now_ms - (lock_duration_ms - doc.remaining_ms);
}

/// Gate into edit mode. Denied while the lock is active; idempotent once in
/// edit mode. The confirmation ritual happens upstream; by the time this is
/// called the only remaining question is the lock.
pub fn enter_edit(doc: &mut Document) -> EditGate {
    if doc.lock_active {
        return EditGate::Denied(DenyReason::LockActive);
    }
    doc.mode = DocMode::Edit;
    EditGate::Granted
}

/// Return to write mode. Never restarts the lock and never touches
/// `lock_active` or `remaining_ms`; the document lands in whichever write
/// sub-state matches the already-computed countdown.
pub fn enter_write(doc: &mut Document) {
    doc.mode = DocMode::Write;
}

/// Attribute elapsed surface time to the current mode's counter.
pub fn accrue_mode_time(doc: &mut Document, delta_ms: i64) {
    if delta_ms <= 0 {
        return;
    }
    match doc.mode {
        DocMode::Write => doc.ms_write += delta_ms,
        DocMode::Edit => doc.ms_edit += delta_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: i64 = 300_000;

    fn new_doc(now: i64) -> Document {
        Document::new("", now, DURATION)
    }

    #[test]
    fn test_new_document_is_write_locked() {
        let doc = new_doc(1_000);
        assert_eq!(lock_state(&doc), LockState::WriteLocked);
        assert_eq!(doc.remaining_ms, DURATION);
    }

    #[test]
    fn test_tick_counts_down_from_anchor() {
        let mut doc = new_doc(1_000);
        let t = tick(&mut doc, 1_000 + 120_000, DURATION);
        assert_eq!(t.remaining_ms, 180_000);
        assert!(!t.unlocked_now);
        assert!(doc.lock_active);
    }

    #[test]
    fn test_invariant_lock_active_iff_remaining_positive() {
        let mut doc = new_doc(0);
        for now in [1, 50_000, 299_999, 300_000, 400_000] {
            tick(&mut doc, now, DURATION);
            assert_eq!(doc.lock_active, doc.remaining_ms > 0, "at now={now}");
        }
    }

    #[test]
    fn test_remaining_is_non_increasing() {
        let mut doc = new_doc(0);
        let mut prev = doc.remaining_ms;
        for now in (0..400_000).step_by(7_919) {
            let t = tick(&mut doc, now, DURATION);
            assert!(t.remaining_ms <= prev, "remaining increased at now={now}");
            prev = t.remaining_ms;
        }
    }

    #[test]
    fn test_clock_rollback_does_not_refill_countdown() {
        let mut doc = new_doc(10_000);
        tick(&mut doc, 10_000 + 100_000, DURATION);
        assert_eq!(doc.remaining_ms, 200_000);

        // Wall clock jumps backwards past the anchor.
        let t = tick(&mut doc, 5_000, DURATION);
        assert_eq!(t.remaining_ms, 200_000);
    }

    #[test]
    fn test_unlock_fires_exactly_once() {
        let mut doc = new_doc(0);
        let t = tick(&mut doc, DURATION + 1, DURATION);
        assert_eq!(t.remaining_ms, 0);
        assert!(t.unlocked_now);
        assert!(!doc.lock_active);

        let t = tick(&mut doc, DURATION + 50_000, DURATION);
        assert_eq!(t.remaining_ms, 0);
        assert!(!t.unlocked_now);
    }

    #[test]
    fn test_one_shot_unlock_survives_reanchor() {
        let mut doc = new_doc(0);
        tick(&mut doc, DURATION + 1, DURATION);
        assert!(!doc.lock_active);

        reanchor_after_hidden(&mut doc, 1_000_000, DURATION);
        tick(&mut doc, 1_000_500, DURATION);
        assert!(!doc.lock_active);
        assert_eq!(doc.remaining_ms, 0);
    }

    #[test]
    fn test_resume_counts_hidden_wall_clock_time() {
        let mut doc = new_doc(0);
        tick(&mut doc, 100_000, DURATION);
        assert_eq!(doc.remaining_ms, 200_000);

        // Hidden for 80s: no ticks land, the anchor is untouched. The resume
        // sequence is tick (hidden wall-clock counts) then re-anchor.
        let resume_at = 180_000;
        let t = tick(&mut doc, resume_at, DURATION);
        assert_eq!(t.remaining_ms, 200_000 - 80_000);

        reanchor_after_hidden(&mut doc, resume_at, DURATION);
        let t = tick(&mut doc, resume_at, DURATION);
        assert_eq!(t.remaining_ms, 200_000 - 80_000);
    }

    #[test]
    fn test_resume_after_hidden_longer_than_remaining_unlocks() {
        let mut doc = new_doc(0);
        tick(&mut doc, 250_000, DURATION);
        assert_eq!(doc.remaining_ms, 50_000);

        let t = tick(&mut doc, 600_000, DURATION);
        assert_eq!(t.remaining_ms, 0);
        assert!(t.unlocked_now);
    }

    #[test]
    fn test_reanchor_makes_anchor_consistent_with_remaining() {
        let mut doc = new_doc(0);
        tick(&mut doc, 100_000, DURATION);

        reanchor_after_hidden(&mut doc, 500_000, DURATION);
        assert_eq!(doc.write_lock_started, 500_000 - (DURATION - 200_000));

        // A tick at the re-anchor instant reads the same remaining back.
        let t = tick(&mut doc, 500_000, DURATION);
        assert_eq!(t.remaining_ms, 200_000);
    }

    #[test]
    fn test_edit_denied_while_locked() {
        let mut doc = new_doc(0);
        tick(&mut doc, 1_000, DURATION);

        let gate = enter_edit(&mut doc);
        assert_eq!(gate, EditGate::Denied(DenyReason::LockActive));
        assert_eq!(doc.mode, DocMode::Write);
    }

    #[test]
    fn test_edit_granted_after_unlock() {
        let mut doc = new_doc(0);
        let t = tick(&mut doc, DURATION + 1, DURATION);
        assert_eq!(t.remaining_ms, 0);
        assert!(!doc.lock_active);

        let gate = enter_edit(&mut doc);
        assert_eq!(gate, EditGate::Granted);
        assert_eq!(doc.mode, DocMode::Edit);
        assert_eq!(lock_state(&doc), LockState::Edit);
    }

    #[test]
    fn test_enter_write_never_restarts_lock() {
        let mut doc = new_doc(0);
        tick(&mut doc, DURATION + 1, DURATION);
        enter_edit(&mut doc);

        enter_write(&mut doc);
        assert_eq!(doc.mode, DocMode::Write);
        assert!(!doc.lock_active);
        assert_eq!(doc.remaining_ms, 0);
        assert_eq!(lock_state(&doc), LockState::WriteUnlocked);
    }

    #[test]
    fn test_mode_cycling_after_unlock() {
        let mut doc = new_doc(0);
        tick(&mut doc, DURATION + 1, DURATION);

        for _ in 0..3 {
            assert_eq!(enter_edit(&mut doc), EditGate::Granted);
            enter_write(&mut doc);
        }
        assert_eq!(lock_state(&doc), LockState::WriteUnlocked);
    }

    #[test]
    fn test_accrue_mode_time_follows_mode() {
        let mut doc = new_doc(0);
        accrue_mode_time(&mut doc, 500);
        accrue_mode_time(&mut doc, 500);
        assert_eq!(doc.ms_write, 1_000);
        assert_eq!(doc.ms_edit, 0);

        tick(&mut doc, DURATION + 1, DURATION);
        enter_edit(&mut doc);
        accrue_mode_time(&mut doc, 750);
        assert_eq!(doc.ms_write, 1_000);
        assert_eq!(doc.ms_edit, 750);
    }

    #[test]
    fn test_accrue_ignores_non_positive_delta() {
        let mut doc = new_doc(0);
        accrue_mode_time(&mut doc, 0);
        accrue_mode_time(&mut doc, -100);
        assert_eq!(doc.ms_write, 0);
    }
}
