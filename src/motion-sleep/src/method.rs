use std::str::FromStr;

use motion_sleep_codec::{QueryArguments, SleepSessionData, records_to_json, sessions_to_json};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::{ActivitySource, MotionSleep, MotionSleepError};

/// Requests the host application can send over the method channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum MotionSleepMethod {
    #[strum(to_string = "fetchActivities", serialize = "fetchActivites")]
    FetchActivities,
    FetchRecentSleepSession,
    FetchSleepSessions,
    IsActivityAvailable,
    RequestAuthorization,
}

impl<S: ActivitySource> MotionSleep<S> {
    /// Runs a named request. `arguments` carries `start`/`end` epoch
    /// milliseconds and, for session requests, a `sleepTime` window which is
    /// validated before any records are queried.
    pub fn handle(&self, method: &str, arguments: Value) -> Result<Value, MotionSleepError> {
        let method = MotionSleepMethod::from_str(method).map_err(|_| {
            warn!("{} is not supported", method);
            MotionSleepError::UnsupportedMethod(method.to_owned())
        })?;
        debug!("Handling {}", method);

        match method {
            MotionSleepMethod::FetchActivities => {
                let arguments = QueryArguments::from_json(arguments)?;
                let (start, end) = arguments.range()?;
                let records = self.fetch_activities(start, end)?;
                Ok(records_to_json(&records)?)
            }
            MotionSleepMethod::FetchSleepSessions => {
                let arguments = QueryArguments::from_json(arguments)?;
                let window = arguments.sleep_window()?;
                let (start, end) = arguments.range()?;
                let sessions = self.fetch_sleep_sessions(start, end, &window)?;
                Ok(sessions_to_json(&sessions)?)
            }
            MotionSleepMethod::FetchRecentSleepSession => {
                let arguments = QueryArguments::from_json(arguments)?;
                let window = arguments.sleep_window()?;
                let (start, end) = arguments.range()?;
                let session = self.fetch_recent_sleep_session(start, end, &window)?;
                Ok(SleepSessionData::from(&session).to_json()?)
            }
            MotionSleepMethod::IsActivityAvailable => Ok(Value::Bool(self.is_activity_available())),
            MotionSleepMethod::RequestAuthorization => {
                self.request_authorization()?;
                Ok(Value::Bool(true))
            }
        }
    }
}
