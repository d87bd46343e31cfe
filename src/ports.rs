pub mod extras;
pub mod sink;

pub use extras::{ENABLE_NOTIFICATION, ENABLE_NOTIFICATION_OLD, LegacyExtras};
pub use sink::LogSink;
