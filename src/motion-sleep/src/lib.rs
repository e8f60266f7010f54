#[macro_use]
extern crate log;

mod error;
pub use error::{MotionSleepError, SourceError};

mod source;
pub use source::{ActivitySource, JsonFileSource};

mod motion_sleep;
pub use motion_sleep::MotionSleep;

mod method;
pub use method::MotionSleepMethod;
