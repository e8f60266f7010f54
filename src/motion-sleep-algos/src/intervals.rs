use chrono::NaiveDateTime;
use motion_sleep_types::{Interval, MotionRecord};

use crate::classifier::{is_sleep_eligible, is_valid_sleep_boundary_pair};

/// Turns a motion stream into candidate sleep intervals.
///
/// Each interval runs from a sleep-eligible record to the first later record
/// that ends sleep. Scanning resumes after that closing record, and the next
/// interval has to start strictly after the previous one ended. An eligible
/// record that never gets closed produces nothing.
///
/// Input is sorted (stably, by start) before the scan.
pub fn build_candidate_intervals(records: &[MotionRecord]) -> Vec<Interval> {
    let mut records = records.iter().collect::<Vec<_>>();
    records.sort_by_key(|r| r.start);

    let mut intervals = Vec::new();
    let mut last_end: Option<NaiveDateTime> = None;
    let mut i = 0;

    while i < records.len() {
        let record = records[i];
        let after_last = last_end.is_none_or(|end| record.start > end);

        if after_last && is_sleep_eligible(record) {
            match find_sleep_end(&records[i + 1..], record) {
                Some((offset, interval)) => {
                    intervals.push(interval);
                    last_end = Some(interval.end());
                    i += offset + 2;
                    continue;
                }
                None => {
                    log::trace!("Eligible record at {} is never closed", record.start);
                }
            }
        }

        i += 1;
    }

    intervals
}

fn find_sleep_end(rest: &[&MotionRecord], lower: &MotionRecord) -> Option<(usize, Interval)> {
    rest.iter().enumerate().find_map(|(offset, upper)| {
        if upper.start > lower.start && is_valid_sleep_boundary_pair(lower, upper) {
            Interval::new(lower.start, upper.start).map(|interval| (offset, interval))
        } else {
            None
        }
    })
}
