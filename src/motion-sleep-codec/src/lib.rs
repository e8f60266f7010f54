#[macro_use]
extern crate serde;

mod error;
pub use error::CodecError;

mod helpers;
pub use helpers::{from_millis, to_millis};

mod motion_data;
pub use motion_data::{MotionRecordData, records_from_json, records_to_json};

mod session_data;
pub use session_data::{SleepSessionData, sessions_to_json};

mod sleep_time;
pub use sleep_time::SleepTimeData;

mod query;
pub use query::QueryArguments;
