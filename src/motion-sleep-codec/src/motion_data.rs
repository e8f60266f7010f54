use motion_sleep_types::{MotionConfidence, MotionRecord};

use crate::{
    CodecError,
    helpers::{from_millis, to_millis},
};

/// Motion record as the host application sends and receives it.
///
/// A record is a point observation, `endDate` always mirrors `startDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionRecordData {
    pub start_date: i64,
    #[serde(default)]
    pub end_date: Option<i64>,
    #[serde(default)]
    pub stationary: bool,
    #[serde(default)]
    pub walking: bool,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub automotive: bool,
    #[serde(default)]
    pub cycling: bool,
    #[serde(default)]
    pub unknown: bool,
    pub confidence: i64,
}

impl TryFrom<MotionRecordData> for MotionRecord {
    type Error = CodecError;

    fn try_from(data: MotionRecordData) -> Result<Self, Self::Error> {
        Ok(Self {
            start: from_millis(data.start_date)?,
            stationary: data.stationary,
            walking: data.walking,
            running: data.running,
            automotive: data.automotive,
            cycling: data.cycling,
            unknown: data.unknown,
            confidence: MotionConfidence::from_raw(data.confidence)
                .ok_or(CodecError::InvalidConfidence(data.confidence))?,
        })
    }
}

impl From<&MotionRecord> for MotionRecordData {
    fn from(record: &MotionRecord) -> Self {
        let start_date = to_millis(record.start);
        Self {
            start_date,
            end_date: Some(start_date),
            stationary: record.stationary,
            walking: record.walking,
            running: record.running,
            automotive: record.automotive,
            cycling: record.cycling,
            unknown: record.unknown,
            confidence: record.confidence.raw(),
        }
    }
}

/// Decodes a JSON array of records.
pub fn records_from_json(json: &str) -> Result<Vec<MotionRecord>, CodecError> {
    serde_json::from_str::<Vec<MotionRecordData>>(json)?
        .into_iter()
        .map(MotionRecord::try_from)
        .collect()
}

pub fn records_to_json(records: &[MotionRecord]) -> Result<serde_json::Value, CodecError> {
    let data = records
        .iter()
        .map(MotionRecordData::from)
        .collect::<Vec<_>>();
    Ok(serde_json::to_value(data)?)
}
