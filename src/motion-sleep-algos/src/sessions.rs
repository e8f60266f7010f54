use motion_sleep_types::{Interval, SleepSession, SleepSessionType};

pub trait SleepSessions {
    /// `asleep` sessions if there are any, otherwise `inBed` sessions.
    fn eligible(&self) -> Vec<SleepSession>;

    fn oldest(&self) -> Option<SleepSession>;

    /// Session with the latest end, first one wins on ties.
    fn latest(&self) -> Option<SleepSession>;

    /// From the oldest start to the latest end.
    fn span(&self) -> Option<Interval>;
}

impl SleepSessions for [SleepSession] {
    fn eligible(&self) -> Vec<SleepSession> {
        let of_kind = |kind: SleepSessionType| {
            self.iter()
                .filter(|s| s.kind == kind)
                .copied()
                .collect::<Vec<_>>()
        };

        let asleep = of_kind(SleepSessionType::Asleep);
        if !asleep.is_empty() {
            return asleep;
        }
        of_kind(SleepSessionType::InBed)
    }

    fn oldest(&self) -> Option<SleepSession> {
        self.iter().min_by_key(|s| s.start()).copied()
    }

    fn latest(&self) -> Option<SleepSession> {
        self.iter()
            .min_by(|a, b| b.end().cmp(&a.end()))
            .copied()
    }

    fn span(&self) -> Option<Interval> {
        Interval::new(self.oldest()?.start(), self.latest()?.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use motion_sleep_types::SleepSessionSource;

    fn at(minutes: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap()
            + TimeDelta::minutes(minutes)
    }

    fn session(kind: SleepSessionType, from: i64, to: i64) -> SleepSession {
        SleepSession {
            kind,
            interval: Interval::new(at(from), at(to)).unwrap(),
            source: SleepSessionSource::Manual,
        }
    }

    #[test]
    fn empty_list() {
        let sessions: Vec<SleepSession> = vec![];
        assert!(sessions.eligible().is_empty());
        assert!(sessions.oldest().is_none());
        assert!(sessions.latest().is_none());
        assert!(sessions.span().is_none());
    }

    #[test]
    fn eligible_prefers_asleep() {
        let sessions = vec![
            session(SleepSessionType::InBed, 0, 60),
            session(SleepSessionType::Asleep, 10, 50),
            session(SleepSessionType::Awake, 50, 55),
        ];
        assert_eq!(sessions.eligible(), vec![sessions[1]]);
    }

    #[test]
    fn eligible_falls_back_to_in_bed() {
        let sessions = vec![
            session(SleepSessionType::Awake, 0, 10),
            session(SleepSessionType::InBed, 10, 60),
        ];
        assert_eq!(sessions.eligible(), vec![sessions[1]]);

        let awake_only = vec![session(SleepSessionType::Awake, 0, 10)];
        assert!(awake_only.eligible().is_empty());
    }

    #[test]
    fn oldest_latest_and_span() {
        let sessions = vec![
            session(SleepSessionType::Asleep, 60, 300),
            session(SleepSessionType::Asleep, 0, 50),
            session(SleepSessionType::Asleep, 100, 200),
        ];
        assert_eq!(sessions.oldest(), Some(sessions[1]));
        assert_eq!(sessions.latest(), Some(sessions[0]));
        assert_eq!(sessions.span(), Interval::new(at(0), at(300)));
    }

    #[test]
    fn latest_tie_takes_first() {
        let sessions = vec![
            session(SleepSessionType::Asleep, 0, 300),
            session(SleepSessionType::InBed, 100, 300),
        ];
        assert_eq!(sessions.latest(), Some(sessions[0]));
    }
}
