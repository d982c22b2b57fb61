//! Notification sinks
//!
//! Destinations for the simulated push notifications raised when a message
//! is sent to an offline user.

mod file;
mod memory;
mod tee;

pub use file::FileNotificationLog;
pub use memory::InMemoryNotificationLog;
pub use tee::TeeNotificationSink;
