//! Categorized in-memory event log
//!
//! Records are kept structured and rendered to text only when mirrored to the
//! live feed or written out by the export codec.

mod entry;
mod live;
mod log;

pub use entry::{LogCategory, LogEntry, LogRecord};
pub use live::{LiveFeed, LiveLine};
pub use log::CaptureLog;
