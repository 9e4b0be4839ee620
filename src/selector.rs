//! Active-schedule selection: what should be playing right now.
//!
//! "Active" is a pure predicate over `(now, timezone)`, recomputed on
//! every call — never a stored status that could drift from wall-clock
//! reality. Display polling calls this arbitrarily often with no side
//! effects.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

use crate::models::{Schedule, Window};

/// Selects the single schedule that should be playing on a display.
///
/// `schedules` is the display's full schedule set as loaded by the
/// caller. The instant `now` is resolved into `timezone` (an IANA name;
/// unknown names fall back to UTC) to obtain the local calendar date and
/// second-of-day, then:
///
/// 1. Inactive schedules are dropped
/// 2. Schedules whose date range misses the local date are dropped
/// 3. Schedules whose daily segments miss the local second are dropped
///    (a zero-length window never matches)
/// 4. Of the rest, the highest priority wins; ties break by most recent
///    `created_at`, then by smallest `id` — the ordering is part of this
///    contract, so selection is reproducible
///
/// Schedules whose raw fields fail to parse are skipped: one corrupt row
/// must not take down polling for the whole display.
///
/// Returns `None` when nothing should be playing — that is a normal
/// outcome, not an error.
pub fn select_active_schedule<'a>(
    schedules: &'a [Schedule],
    now: DateTime<Utc>,
    timezone: &str,
) -> Option<&'a Schedule> {
    let tz: Tz = timezone.parse().unwrap_or(chrono_tz::UTC);
    let local = now.with_timezone(&tz);
    let local_date = local.date_naive();
    let local_second = local.num_seconds_from_midnight();

    let mut candidates: Vec<&Schedule> = schedules
        .iter()
        .filter(|schedule| schedule.is_active)
        .filter_map(|schedule| {
            Window::from_schedule(schedule)
                .ok()
                .map(|window| (schedule, window))
        })
        .filter(|(_, window)| {
            window.contains_date(local_date) && window.contains_second(local_second)
        })
        .map(|(schedule, _)| schedule)
        .collect();

    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    candidates.into_iter().next()
}
