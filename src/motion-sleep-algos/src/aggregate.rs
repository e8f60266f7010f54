use motion_sleep_types::{Interval, SleepSession, SleepWindow};

use crate::{helpers::time_math::whole_minutes_between, window::filter_candidates};

/// Largest gap, in whole minutes, between two intervals that still merges them.
pub const MAX_SLEEP_GAP_MINUTES: i64 = 15;

/// Merges intervals whose gap is within [`MAX_SLEEP_GAP_MINUTES`].
///
/// The gap is compared by absolute value, so an interval starting up to the
/// same tolerance before the current end merges too.
/// Output is sorted by start.
pub fn coalesce(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for next in iter {
        let gap = whole_minutes_between(current.end(), next.start());
        if gap.abs() <= MAX_SLEEP_GAP_MINUTES {
            log::trace!(
                "Merging {} - {} into session started {} ({} min gap)",
                next.start(),
                next.end(),
                current.start(),
                gap
            );
            current = current.extend_to(next.end());
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}

/// Duration and window filtering followed by coalescing.
pub fn filter_and_aggregate(candidates: &[Interval], window: &SleepWindow) -> Vec<SleepSession> {
    let kept = filter_candidates(candidates, window);
    coalesce(&kept)
        .into_iter()
        .map(SleepSession::asleep)
        .collect()
}
