use motion_sleep_types::{MotionConfidence, MotionRecord};

/// What a single record says about sleep.
///
/// Only high-confidence records carry a signal, anything less is `Neutral`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ending,
    Neutral,
}

pub fn classify(record: &MotionRecord) -> Eligibility {
    if is_sleep_eligible(record) {
        Eligibility::Eligible
    } else if is_sleep_ending(record) {
        Eligibility::Ending
    } else {
        Eligibility::Neutral
    }
}

/// Device at rest and the classifier is sure of it.
pub fn is_sleep_eligible(record: &MotionRecord) -> bool {
    record.confidence == MotionConfidence::High && record.stationary && !record.is_moving()
}

pub fn is_sleep_ending(record: &MotionRecord) -> bool {
    record.confidence == MotionConfidence::High && (record.is_moving() || !record.stationary)
}

/// `upper` may close a sleep stretch opened by `lower`.
pub fn is_valid_sleep_boundary_pair(lower: &MotionRecord, upper: &MotionRecord) -> bool {
    lower.start <= upper.start && is_sleep_eligible(lower) && is_sleep_ending(upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    fn at(minutes: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(23, 0, 0)
            .unwrap()
            + TimeDelta::minutes(minutes)
    }

    fn flags(record: &mut MotionRecord, index: usize) {
        match index {
            0 => record.walking = true,
            1 => record.running = true,
            2 => record.automotive = true,
            3 => record.cycling = true,
            _ => record.unknown = true,
        }
    }

    #[test]
    fn high_confidence_stationary_is_eligible() {
        let record = MotionRecord::stationary(at(0), MotionConfidence::High);
        assert!(is_sleep_eligible(&record));
        assert!(!is_sleep_ending(&record));
        assert_eq!(classify(&record), Eligibility::Eligible);
    }

    #[test]
    fn low_and_medium_confidence_are_neutral() {
        for confidence in [MotionConfidence::Low, MotionConfidence::Medium] {
            let still = MotionRecord::stationary(at(0), confidence);
            let walking = MotionRecord::walking(at(0), confidence);
            assert_eq!(classify(&still), Eligibility::Neutral);
            assert_eq!(classify(&walking), Eligibility::Neutral);
        }
    }

    #[test]
    fn any_motion_flag_ends_sleep() {
        for index in 0..5 {
            let mut record = MotionRecord::stationary(at(0), MotionConfidence::High);
            flags(&mut record, index);
            assert!(!is_sleep_eligible(&record), "flag {index}");
            assert!(is_sleep_ending(&record), "flag {index}");
        }
    }

    #[test]
    fn not_stationary_without_flags_ends_sleep() {
        let mut record = MotionRecord::stationary(at(0), MotionConfidence::High);
        record.stationary = false;
        assert_eq!(classify(&record), Eligibility::Ending);
    }

    #[test]
    fn never_both_eligible_and_ending() {
        for bits in 0u32..64 {
            for confidence in [
                MotionConfidence::Low,
                MotionConfidence::Medium,
                MotionConfidence::High,
            ] {
                let record = MotionRecord {
                    start: at(0),
                    stationary: bits & 1 != 0,
                    walking: bits & 2 != 0,
                    running: bits & 4 != 0,
                    automotive: bits & 8 != 0,
                    cycling: bits & 16 != 0,
                    unknown: bits & 32 != 0,
                    confidence,
                };
                assert!(!(is_sleep_eligible(&record) && is_sleep_ending(&record)));
            }
        }
    }

    #[test]
    fn boundary_pair_requires_order_and_roles() {
        let still = MotionRecord::stationary(at(0), MotionConfidence::High);
        let walk = MotionRecord::walking(at(45), MotionConfidence::High);
        assert!(is_valid_sleep_boundary_pair(&still, &walk));

        let walk_before = MotionRecord::walking(at(-5), MotionConfidence::High);
        assert!(!is_valid_sleep_boundary_pair(&still, &walk_before));

        let weak_walk = MotionRecord::walking(at(45), MotionConfidence::Medium);
        assert!(!is_valid_sleep_boundary_pair(&still, &weak_walk));

        assert!(!is_valid_sleep_boundary_pair(&walk, &still));
    }
}
