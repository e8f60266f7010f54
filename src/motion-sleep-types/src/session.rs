use std::fmt::{self, Display};

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::Interval;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SleepSessionType {
    Asleep,
    InBed,
    Awake,
}

/// Where a session came from. Motion inference only ever produces `Motion`,
/// `Manual` marks sessions entered by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SleepSessionSource {
    Motion,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SleepSession {
    pub kind: SleepSessionType,
    pub interval: Interval,
    pub source: SleepSessionSource,
}

impl SleepSession {
    pub fn asleep(interval: Interval) -> Self {
        Self {
            kind: SleepSessionType::Asleep,
            interval,
            source: SleepSessionSource::Motion,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.interval.start()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.interval.end()
    }

    pub fn duration(&self) -> TimeDelta {
        self.interval.duration()
    }
}

impl SleepSessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepSessionType::Asleep => "asleep",
            SleepSessionType::InBed => "inBed",
            SleepSessionType::Awake => "awake",
        }
    }
}

impl SleepSessionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepSessionSource::Motion => "motion",
            SleepSessionSource::Manual => "manual",
        }
    }
}

impl Display for SleepSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sleep session: {} - {}, type: {}, source: {}",
            self.start(),
            self.end(),
            self.kind.as_str(),
            self.source.as_str()
        )
    }
}
