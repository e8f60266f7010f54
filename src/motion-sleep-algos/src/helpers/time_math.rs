use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

/// Same calendar day as `instant`, at `time`.
pub fn on_same_day(instant: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    instant.date().and_time(time)
}

pub fn shift_days(instant: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    instant.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Whole minutes from `from` to `to`, truncated toward zero.
pub fn whole_minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn on_same_day_replaces_time() {
        let time = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        assert_eq!(on_same_day(at(3, 4, 17, 12), time), at(3, 22, 0, 0));
    }

    #[test]
    fn shift_days_crosses_month() {
        let end = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let next = NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(shift_days(end, 1), Some(next));
        assert_eq!(shift_days(next, -1), Some(end));
    }

    #[test]
    fn whole_minutes_truncate() {
        assert_eq!(whole_minutes_between(at(1, 23, 50, 0), at(2, 0, 5, 0)), 15);
        assert_eq!(whole_minutes_between(at(1, 23, 50, 0), at(2, 0, 5, 59)), 15);
        assert_eq!(whole_minutes_between(at(1, 23, 50, 0), at(1, 23, 49, 30)), 0);
        assert_eq!(whole_minutes_between(at(1, 23, 50, 0), at(1, 23, 30, 0)), -20);
    }
}
