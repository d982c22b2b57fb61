//! Sink that appends one line per push to a file

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::warn;

use market_core::entities::PushNotification;
use market_core::traits::NotificationSink;

/// Append-only push log on disk. Write failures are logged and dropped.
#[derive(Debug)]
pub struct FileNotificationLog {
    path: PathBuf,
    // serializes appends so lines from concurrent callers never interleave
    write_lock: Mutex<()>,
}

impl FileNotificationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl NotificationSink for FileNotificationLog {
    fn record(&self, push: &PushNotification) {
        if let Err(e) = self.append(&push.to_log_line()) {
            warn!(
                path = %self.path.display(),
                user_id = %push.user_id,
                error = %e,
                "Failed to write push notification log"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::Snowflake;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_appends_one_line_per_push() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appends.log");

        let sink = FileNotificationLog::new(&path);
        sink.record(&PushNotification::new(Snowflake::new(1), "Hello".to_string()));
        sink.record(&PushNotification::new(Snowflake::new(2), "Again".to_string()));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Hello"));
        assert!(lines[1].contains("user=2"));
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("push.log");
        let sink = FileNotificationLog::new(&path);
        sink.record(&PushNotification::new(Snowflake::new(1), "lost".to_string()));
        assert!(!path.exists());
    }
}
