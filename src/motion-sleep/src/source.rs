use std::path::PathBuf;

use chrono::NaiveDateTime;
use motion_sleep_codec::records_from_json;
use motion_sleep_types::MotionRecord;

use crate::SourceError;

/// Where motion records come from, e.g. the platform's motion coprocessor.
pub trait ActivitySource {
    fn is_available(&self) -> bool;

    fn request_authorization(&self) -> Result<(), SourceError>;

    /// Records starting within `[start, end]`, ascending by start.
    fn query_activities(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<MotionRecord>, SourceError>;
}

/// Reads records from a JSON file in the host transport format.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ActivitySource for JsonFileSource {
    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn request_authorization(&self) -> Result<(), SourceError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(SourceError::Unavailable)
        }
    }

    fn query_activities(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<MotionRecord>, SourceError> {
        let json = std::fs::read_to_string(&self.path)?;
        let mut records = records_from_json(&json)?
            .into_iter()
            .filter(|record| start <= record.start && record.start <= end)
            .collect::<Vec<_>>();
        records.sort_by_key(|record| record.start);
        trace!("Read {} records from {}", records.len(), self.path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_records(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("records.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("records.json"));
        assert!(!source.is_available());
        assert!(matches!(
            source.request_authorization(),
            Err(SourceError::Unavailable)
        ));
        assert!(matches!(
            source.query_activities(at(0), at(1)),
            Err(SourceError::Io(_))
        ));
    }

    #[test]
    fn directory_is_not_a_source() {
        let dir = tempdir().unwrap();
        let source = JsonFileSource::new(dir.path());
        assert!(!source.is_available());
    }

    #[test]
    fn filters_to_range_and_sorts() {
        let dir = tempdir().unwrap();
        let path = write_records(
            dir.path(),
            r#"[
                {"startDate": 7200000, "stationary": true, "confidence": 2},
                {"startDate": 3600000, "walking": true, "confidence": 2},
                {"startDate": 36000000, "walking": true, "confidence": 2}
            ]"#,
        );
        let source = JsonFileSource::new(&path);
        assert!(source.is_available());
        assert!(source.request_authorization().is_ok());

        let records = source.query_activities(at(0), at(2)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start, at(1));
        assert_eq!(records[1].start, at(2));
    }

    #[test]
    fn bad_records_are_codec_errors() {
        let dir = tempdir().unwrap();
        let path = write_records(dir.path(), r#"[{"startDate": 0, "confidence": 9}]"#);
        let result = JsonFileSource::new(&path).query_activities(at(0), at(1));
        assert!(matches!(result, Err(SourceError::Codec(_))));
    }

    #[test]
    fn fixture_is_removed_with_its_directory() {
        let dir = tempdir().unwrap();
        let path = write_records(dir.path(), "[]");
        assert!(JsonFileSource::new(&path).is_available());

        dir.close().unwrap();
        assert!(!JsonFileSource::new(&path).is_available());
    }
}
