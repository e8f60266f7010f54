use motion_sleep_types::SleepWindow;

use crate::CodecError;

/// Sleep window dictionary, e.g.
/// `{"startingHours": 22, "startingMinutes": 0, "endingHours": 8, "endingMinutes": 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepTimeData {
    pub starting_hours: i64,
    pub starting_minutes: i64,
    pub ending_hours: i64,
    pub ending_minutes: i64,
}

impl TryFrom<SleepTimeData> for SleepWindow {
    type Error = CodecError;

    fn try_from(data: SleepTimeData) -> Result<Self, Self::Error> {
        Ok(SleepWindow::new(
            data.starting_hours,
            data.starting_minutes,
            data.ending_hours,
            data.ending_minutes,
        )?)
    }
}

impl From<&SleepWindow> for SleepTimeData {
    fn from(window: &SleepWindow) -> Self {
        Self {
            starting_hours: window.starting_hour().into(),
            starting_minutes: window.starting_minute().into(),
            ending_hours: window.ending_hour().into(),
            ending_minutes: window.ending_minute().into(),
        }
    }
}
