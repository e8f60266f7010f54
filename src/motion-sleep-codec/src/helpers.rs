use chrono::{DateTime, NaiveDateTime};

use crate::CodecError;

/// Epoch milliseconds to a UTC wall clock.
pub fn from_millis(millis: i64) -> Result<NaiveDateTime, CodecError> {
    DateTime::from_timestamp_millis(millis)
        .map(|time| time.naive_utc())
        .ok_or(CodecError::InvalidTimestamp(millis))
}

pub fn to_millis(time: NaiveDateTime) -> i64 {
    time.and_utc().timestamp_millis()
}
