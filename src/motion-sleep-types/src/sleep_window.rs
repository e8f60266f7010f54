use std::{fmt, str::FromStr};

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SleepWindowError {
    #[error("Invalid {field}: {value} (expected 0..=23)")]
    InvalidHour { field: &'static str, value: i64 },

    #[error("Invalid {field}: {value} (expected 0..=59)")]
    InvalidMinute { field: &'static str, value: i64 },

    #[error("Invalid sleep window `{0}` (expected HH:MM-HH:MM)")]
    InvalidFormat(String),
}

/// Daily wall-clock range a sleep session has to fall in, e.g. 22:00-09:00.
///
/// An ending time before the starting time means the window spans midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SleepWindow {
    starting_hour: u32,
    starting_minute: u32,
    ending_hour: u32,
    ending_minute: u32,
}

impl SleepWindow {
    pub fn new(
        starting_hour: i64,
        starting_minute: i64,
        ending_hour: i64,
        ending_minute: i64,
    ) -> Result<Self, SleepWindowError> {
        Ok(Self {
            starting_hour: hour("starting hour", starting_hour)?,
            starting_minute: minute("starting minute", starting_minute)?,
            ending_hour: hour("ending hour", ending_hour)?,
            ending_minute: minute("ending minute", ending_minute)?,
        })
    }

    pub fn starting_hour(&self) -> u32 {
        self.starting_hour
    }

    pub fn starting_minute(&self) -> u32 {
        self.starting_minute
    }

    pub fn ending_hour(&self) -> u32 {
        self.ending_hour
    }

    pub fn ending_minute(&self) -> u32 {
        self.ending_minute
    }

    pub fn start_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.starting_hour, self.starting_minute, 0).unwrap_or_default()
    }

    pub fn end_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.ending_hour, self.ending_minute, 0).unwrap_or_default()
    }

    pub fn crosses_midnight(&self) -> bool {
        self.end_time() < self.start_time()
    }
}

fn hour(field: &'static str, value: i64) -> Result<u32, SleepWindowError> {
    match value {
        0..=23 => Ok(value as u32),
        _ => Err(SleepWindowError::InvalidHour { field, value }),
    }
}

fn minute(field: &'static str, value: i64) -> Result<u32, SleepWindowError> {
    match value {
        0..=59 => Ok(value as u32),
        _ => Err(SleepWindowError::InvalidMinute { field, value }),
    }
}

impl FromStr for SleepWindow {
    type Err = SleepWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SleepWindowError::InvalidFormat(s.to_owned());

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let parse_hm = |part: &str| -> Result<(i64, i64), SleepWindowError> {
            let (h, m) = part.trim().split_once(':').ok_or_else(invalid)?;
            let h = h.parse().map_err(|_| invalid())?;
            let m = m.parse().map_err(|_| invalid())?;
            Ok((h, m))
        };

        let (starting_hour, starting_minute) = parse_hm(start)?;
        let (ending_hour, ending_minute) = parse_hm(end)?;
        Self::new(starting_hour, starting_minute, ending_hour, ending_minute)
    }
}

impl fmt::Display for SleepWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.starting_hour, self.starting_minute, self.ending_hour, self.ending_minute
        )
    }
}
