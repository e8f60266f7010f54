use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Confidence the motion coprocessor reports for a classification.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MotionConfidence {
    #[default]
    Low = 0,
    Medium = 1,
    High = 2,
}

impl MotionConfidence {
    pub fn from_raw(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }

    pub fn raw(self) -> i64 {
        self as i64
    }
}

/// One classified motion observation. `start` is a UTC wall clock.
///
/// The flags come straight from the sensor and are not mutually exclusive,
/// a record can be both `stationary` and `automotive` (sitting in a car at a light).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MotionRecord {
    pub start: NaiveDateTime,
    pub stationary: bool,
    pub walking: bool,
    pub running: bool,
    pub automotive: bool,
    pub cycling: bool,
    pub unknown: bool,
    pub confidence: MotionConfidence,
}

impl MotionRecord {
    pub fn stationary(start: NaiveDateTime, confidence: MotionConfidence) -> Self {
        Self {
            start,
            stationary: true,
            walking: false,
            running: false,
            automotive: false,
            cycling: false,
            unknown: false,
            confidence,
        }
    }

    pub fn walking(start: NaiveDateTime, confidence: MotionConfidence) -> Self {
        Self {
            stationary: false,
            walking: true,
            ..Self::stationary(start, confidence)
        }
    }

    /// True when any flag other than `stationary` is raised.
    pub fn is_moving(&self) -> bool {
        self.walking || self.running || self.automotive || self.cycling || self.unknown
    }
}
