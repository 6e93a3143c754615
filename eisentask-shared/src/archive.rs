/// Archive view selection
///
/// The archived view shows tasks that are finished or stale: `done` tasks of
/// any age, plus tasks created strictly before the start of yesterday in the
/// configured timezone. Selection is read-only; it never touches
/// `deleted_at`.
///
/// "Yesterday at local midnight" depends on a timezone, so the boundary is
/// computed from an explicit UTC offset and an explicit "now" rather than
/// ambient host state.
use chrono::{DateTime, Days, FixedOffset, Utc};

use crate::models::task::Task;

/// Computes the archive boundary: local midnight of the day before `now_utc`
/// as seen in `offset`, converted back to UTC.
///
/// Tasks created strictly before this instant qualify for the archive even
/// when not done.
pub fn archive_cutoff(now_utc: DateTime<Utc>, offset: FixedOffset) -> DateTime<Utc> {
    let local_today = now_utc.with_timezone(&offset).date_naive();
    let yesterday = local_today
        .checked_sub_days(Days::new(1))
        .unwrap_or(local_today);

    yesterday
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time of day")
        .and_local_timezone(offset)
        .single()
        .expect("fixed offsets map local times unambiguously")
        .with_timezone(&Utc)
}

/// Checks whether a task belongs in the archived view for a given cutoff.
///
/// Done tasks always qualify; otherwise the creation instant must be
/// strictly earlier than the cutoff. Soft-deleted tasks are filtered out by
/// the caller before this check.
pub fn is_archived(task: &Task, cutoff: DateTime<Utc>) -> bool {
    task.done || task.created_at < cutoff
}
