use chrono::NaiveDateTime;
use motion_sleep_algos::{most_recent_session, to_sleep_sessions};
use motion_sleep_types::{MotionRecord, SleepSession, SleepWindow};

use crate::{ActivitySource, MotionSleepError, SourceError};

pub struct MotionSleep<S> {
    pub source: S,
}

impl<S: ActivitySource> MotionSleep<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn is_activity_available(&self) -> bool {
        self.source.is_available()
    }

    pub fn request_authorization(&self) -> Result<(), MotionSleepError> {
        Ok(self.source.request_authorization()?)
    }

    pub fn fetch_activities(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<MotionRecord>, MotionSleepError> {
        Ok(self.query(start, end)?)
    }

    pub fn fetch_sleep_sessions(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        window: &SleepWindow,
    ) -> Result<Vec<SleepSession>, MotionSleepError> {
        let records = self.query(start, end)?;
        let sessions = to_sleep_sessions(&records, window);
        info!(
            "Found {} sleep sessions between {} and {} ({})",
            sessions.len(),
            start,
            end,
            window
        );
        Ok(sessions)
    }

    pub fn fetch_recent_sleep_session(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        window: &SleepWindow,
    ) -> Result<SleepSession, MotionSleepError> {
        let records = self.query(start, end)?;
        most_recent_session(&records, window).ok_or(MotionSleepError::NoSleepSession)
    }

    fn query(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<MotionRecord>, SourceError> {
        let records = self.source.query_activities(start, end)?;
        debug!("Queried {} motion records", records.len());
        Ok(records)
    }
}
