use chrono::{NaiveDateTime, TimeDelta};

/// Half-open time range `[start, end)` with `start < end`.
///
/// Ordering is by `start`, then `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Interval {
    /// Returns `None` for empty or inverted ranges.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Extends the end to `end` if it is later than the current one.
    pub fn extend_to(self, end: NaiveDateTime) -> Self {
        Self {
            start: self.start,
            end: self.end.max(end),
        }
    }
}
