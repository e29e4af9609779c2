mod log;

pub use self::log::{InitializeLogError, LogConfig};
