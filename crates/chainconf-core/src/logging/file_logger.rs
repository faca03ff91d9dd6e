//! File-based debug logger for troubleshooting
//!
//! A global logger that appends to `$TMPDIR/chainconf-debug.log` (or
//! `CHAINCONF_LOG_FILE`). Disabled unless `CHAINCONF_DEBUG` is `1` or `true`;
//! `CHAINCONF_LOG_LEVEL` sets the threshold (default `debug`).
//!
//! Never pass secret values to these functions; log credential keys only.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::SystemTime;

use parking_lot::Mutex;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Global file logger configuration and state
struct FileLoggerState {
    file: Option<File>,
    min_level: LogLevel,
    enabled: bool,
}

impl FileLoggerState {
    fn new() -> Self {
        let enabled = std::env::var("CHAINCONF_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = std::env::var("CHAINCONF_LOG_LEVEL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogLevel::Debug);

        // only touch the filesystem when logging is on
        let file = if enabled { open_log(&default_log_path()) } else { None };

        Self { file, min_level, enabled }
    }

    fn write(&mut self, level: LogLevel, module: &str, message: &str) {
        if !self.enabled || level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let timestamp = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| {
                    let secs = d.as_secs();
                    format!(
                        "{:02}:{:02}:{:02}.{:03}",
                        (secs % 86400) / 3600,
                        (secs % 3600) / 60,
                        secs % 60,
                        d.subsec_millis()
                    )
                })
                .unwrap_or_else(|_| "??:??:??.???".to_string());

            let _ = writeln!(file, "[{}] [{:5}] [{}] {}", timestamp, level.as_str(), module, message);
            let _ = file.flush();
        }
    }
}

impl FileLoggerState {
    fn clear(&mut self, path: &Path) {
        if !self.enabled {
            return;
        }
        if let Ok(file) = File::create(path) {
            drop(file);
        }
        self.file = open_log(path);
    }
}

fn default_log_path() -> PathBuf {
    match std::env::var_os("CHAINCONF_LOG_FILE") {
        Some(path) => PathBuf::from(path),
        None => std::env::temp_dir().join("chainconf-debug.log"),
    }
}

fn open_log(path: &Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

static LOGGER: OnceLock<Mutex<FileLoggerState>> = OnceLock::new();

fn get_logger() -> &'static Mutex<FileLoggerState> {
    LOGGER.get_or_init(|| Mutex::new(FileLoggerState::new()))
}

/// Log a message at the specified level
pub fn log(level: LogLevel, module: &str, message: &str) {
    get_logger().lock().write(level, module, message);
}

/// Log a trace message
pub fn trace(module: &str, message: &str) {
    log(LogLevel::Trace, module, message);
}

/// Log a debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log an info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log a warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log an error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

/// Get the path to the log file
pub fn log_file_path() -> PathBuf {
    default_log_path()
}

/// Truncate the log file and reopen it; no-op while logging is off
pub fn clear_log() {
    get_logger().lock().clear(&log_file_path());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(LogLevel::Debug > LogLevel::Trace);
        assert!(LogLevel::Info > LogLevel::Debug);
        assert!(LogLevel::Warn > LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("TRACE".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_clear_only_touches_disk_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainconf-debug.log");
        let mut state = FileLoggerState {
            file: None,
            min_level: LogLevel::Debug,
            enabled: false,
        };

        state.clear(&path);
        assert!(!path.exists());
        assert!(state.file.is_none());

        state.enabled = true;
        std::fs::write(&path, "old entry\n").unwrap();
        state.clear(&path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        state.write(LogLevel::Info, "test", "fresh entry");
        assert!(std::fs::read_to_string(&path).unwrap().contains("fresh entry"));
    }

    #[test]
    fn test_logging() {
        // must not panic whether or not CHAINCONF_DEBUG is set
        debug("test", "test message");
        info("test", "test message");
        warn("test", "test message");
        error("test", "test message");
    }
}
