pub(crate) mod classifier;
pub use classifier::{
    Eligibility, classify, is_sleep_eligible, is_sleep_ending, is_valid_sleep_boundary_pair,
};

pub(crate) mod intervals;
pub use intervals::build_candidate_intervals;

pub(crate) mod window;
pub use window::{MIN_SLEEP_DURATION, NightWindow, filter_candidates, fits_window};

pub(crate) mod aggregate;
pub use aggregate::{MAX_SLEEP_GAP_MINUTES, coalesce, filter_and_aggregate};

pub(crate) mod sessions;
pub use sessions::SleepSessions;

pub(crate) mod pipeline;
pub use pipeline::{most_recent_session, to_sleep_sessions};

pub mod helpers;
