use chrono::NaiveDateTime;
use motion_sleep_types::SleepWindow;

use crate::{CodecError, SleepTimeData, helpers::from_millis};

/// Arguments of a fetch request: `start`/`end` in epoch milliseconds and,
/// for session requests, the `sleepTime` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryArguments {
    pub start: i64,
    pub end: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_time: Option<SleepTimeData>,
}

impl QueryArguments {
    pub fn from_json(value: serde_json::Value) -> Result<Self, CodecError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn range(&self) -> Result<(NaiveDateTime, NaiveDateTime), CodecError> {
        Ok((from_millis(self.start)?, from_millis(self.end)?))
    }

    /// Validated sleep window, required for session requests.
    pub fn sleep_window(&self) -> Result<SleepWindow, CodecError> {
        self.sleep_time
            .ok_or(CodecError::MissingArgument("sleepTime"))?
            .try_into()
    }
}
