use motion_sleep_types::{MotionRecord, SleepSession, SleepWindow};

use crate::{
    aggregate::filter_and_aggregate, intervals::build_candidate_intervals, sessions::SleepSessions,
};

/// Full inference: candidate intervals, window filtering, coalescing.
pub fn to_sleep_sessions(records: &[MotionRecord], window: &SleepWindow) -> Vec<SleepSession> {
    let candidates = build_candidate_intervals(records);
    let sessions = filter_and_aggregate(&candidates, window);
    log::debug!(
        "{} records -> {} candidates -> {} sessions",
        records.len(),
        candidates.len(),
        sessions.len()
    );
    sessions
}

/// The inferred session ending last, if any.
pub fn most_recent_session(
    records: &[MotionRecord],
    window: &SleepWindow,
) -> Option<SleepSession> {
    to_sleep_sessions(records, window).latest()
}
