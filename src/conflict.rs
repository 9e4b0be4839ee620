//! Overlap detection between schedule windows on one display.
//!
//! Two windows conflict iff all of:
//! 1. They target the same display
//! 2. Their inclusive date ranges overlap
//! 3. At least one pair of daily segments overlaps (half-open
//!    intersection, tested across the cross product of segment pairs)
//!
//! Splitting midnight-wrapping ranges into two segments at derivation
//! time means no wraparound-aware comparison exists here: a wrapped
//! window against an ordinary one is just 2×1 segment pairs.
//!
//! # Concurrency
//! The check itself is pure and lock-free. Callers follow a
//! read-check-write pattern (load existing windows, check, persist), so
//! two concurrent writers can both pass against a stale snapshot. Run the
//! whole sequence inside one serializable transaction or a per-display
//! lock if that matters to you.

use std::collections::HashSet;

use crate::error::ScheduleError;
use crate::models::Window;

/// Whether two windows conflict.
///
/// Symmetric and order-independent. Windows with no daily segments
/// (zero-length time ranges) never conflict with anything: there are no
/// segment pairs to compare.
pub fn windows_conflict(a: &Window, b: &Window) -> bool {
    if a.display_id != b.display_id {
        return false;
    }
    if !a.dates_overlap(b) {
        return false;
    }
    a.segments
        .iter()
        .any(|sa| b.segments.iter().any(|sb| sa.overlaps(sb)))
}

/// Checks a candidate window against the existing windows of its display.
///
/// Windows whose schedule ID is in `exclude_ids` are skipped — an update
/// must not conflict with its own prior state.
///
/// # Errors
/// [`ScheduleError::ScheduleConflict`] naming the first existing schedule
/// whose window overlaps the candidate.
pub fn ensure_no_conflicts(
    candidate: &Window,
    existing: &[Window],
    exclude_ids: &HashSet<String>,
) -> Result<(), ScheduleError> {
    for window in existing {
        if exclude_ids.contains(&window.schedule_id) {
            continue;
        }
        if windows_conflict(candidate, window) {
            return Err(ScheduleError::ScheduleConflict {
                conflicting_id: window.schedule_id.clone(),
            });
        }
    }
    Ok(())
}
