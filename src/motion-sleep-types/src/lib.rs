mod motion;
pub use motion::{MotionConfidence, MotionRecord};

mod interval;
pub use interval::Interval;

mod session;
pub use session::{SleepSession, SleepSessionSource, SleepSessionType};

mod sleep_window;
pub use sleep_window::{SleepWindow, SleepWindowError};
