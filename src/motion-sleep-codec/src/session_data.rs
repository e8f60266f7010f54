use motion_sleep_types::{Interval, SleepSession, SleepSessionSource, SleepSessionType};

use crate::{
    CodecError,
    helpers::{from_millis, to_millis},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSessionData {
    #[serde(rename = "type")]
    pub kind: SleepSessionType,
    pub start_date: i64,
    pub end_date: i64,
    pub source: SleepSessionSource,
}

impl From<&SleepSession> for SleepSessionData {
    fn from(session: &SleepSession) -> Self {
        Self {
            kind: session.kind,
            start_date: to_millis(session.start()),
            end_date: to_millis(session.end()),
            source: session.source,
        }
    }
}

impl TryFrom<SleepSessionData> for SleepSession {
    type Error = CodecError;

    fn try_from(data: SleepSessionData) -> Result<Self, Self::Error> {
        let interval = Interval::new(from_millis(data.start_date)?, from_millis(data.end_date)?)
            .ok_or(CodecError::InvalidSessionInterval {
                start: data.start_date,
                end: data.end_date,
            })?;

        Ok(Self {
            kind: data.kind,
            interval,
            source: data.source,
        })
    }
}

impl SleepSessionData {
    pub fn to_json(&self) -> Result<serde_json::Value, CodecError> {
        Ok(serde_json::to_value(self)?)
    }
}

pub fn sessions_to_json(sessions: &[SleepSession]) -> Result<serde_json::Value, CodecError> {
    let data = sessions
        .iter()
        .map(SleepSessionData::from)
        .collect::<Vec<_>>();
    Ok(serde_json::to_value(data)?)
}
