use chrono::{NaiveDateTime, TimeDelta};
use motion_sleep_types::{Interval, SleepWindow};

use crate::helpers::time_math::{on_same_day, shift_days};

pub const MIN_SLEEP_DURATION: TimeDelta = TimeDelta::seconds(1800);

/// Concrete instants of a [`SleepWindow`] on one night. `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NightWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl NightWindow {
    /// The night `instant` belongs to, in UTC.
    ///
    /// For a window crossing midnight the end moves to the following day, and
    /// an instant in the morning part (at or before the ending time) belongs to
    /// the window that opened the evening before.
    pub fn containing(window: &SleepWindow, instant: NaiveDateTime) -> Option<Self> {
        let start = on_same_day(instant, window.start_time());
        let end = on_same_day(instant, window.end_time());

        if !window.crosses_midnight() {
            return Some(Self { start, end });
        }

        if instant.time() <= window.end_time() {
            Some(Self {
                start: shift_days(start, -1)?,
                end,
            })
        } else {
            Some(Self {
                start,
                end: shift_days(end, 1)?,
            })
        }
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }
}

pub fn is_long_enough(interval: &Interval) -> bool {
    interval.duration() >= MIN_SLEEP_DURATION
}

/// Both ends of `interval` inside the night its start belongs to.
pub fn fits_window(interval: &Interval, window: &SleepWindow) -> bool {
    NightWindow::containing(window, interval.start())
        .is_some_and(|night| night.contains(interval.start()) && night.contains(interval.end()))
}

/// Drops candidates that are too short or fall outside the nightly window.
/// Order is preserved.
pub fn filter_candidates(candidates: &[Interval], window: &SleepWindow) -> Vec<Interval> {
    candidates
        .iter()
        .filter(|interval| {
            if !is_long_enough(interval) {
                log::debug!(
                    "Dropping {} - {}: shorter than {} minutes",
                    interval.start(),
                    interval.end(),
                    MIN_SLEEP_DURATION.num_minutes()
                );
                return false;
            }
            if !fits_window(interval, window) {
                log::debug!(
                    "Dropping {} - {}: outside sleep window {}",
                    interval.start(),
                    interval.end(),
                    window
                );
                return false;
            }
            true
        })
        .copied()
        .collect()
}
