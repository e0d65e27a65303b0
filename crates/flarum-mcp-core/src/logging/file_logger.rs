//! File trace of forum traffic
//!
//! Stdout is the MCP transport and hosts often swallow stderr, so request
//! traces go to a file instead. Off unless `FLARUM_MCP_DEBUG` is `1` or
//! `true`.
//!
//! - `FLARUM_MCP_LOG_LEVEL`: `debug` (default), `info`, `warn` or `error`
//! - `FLARUM_MCP_LOG_FILE`: path override, default `$TMP/flarum-mcp-debug.log`
//!
//! Only URLs, statuses, lengths and tag ids are traced. Never pass a
//! credential or request body to these functions.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Parse a level name, case-insensitive
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// An append-only trace file with a level threshold
pub struct FileSink {
    file: File,
    min_level: LogLevel,
}

impl FileSink {
    pub fn open(path: &Path, min_level: LogLevel) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file, min_level })
    }

    /// Sink configured from the environment, `None` when tracing is off
    fn from_env() -> Option<Self> {
        if !debug_enabled() {
            return None;
        }
        let min_level = std::env::var("FLARUM_MCP_LOG_LEVEL")
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Debug);
        Self::open(&log_file_path(), min_level).ok()
    }

    pub fn write(&mut self, level: LogLevel, module: &str, message: &str) -> io::Result<()> {
        if level < self.min_level {
            return Ok(());
        }
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        writeln!(
            self.file,
            "{}.{:03} {:<5} {} {}",
            millis / 1000,
            millis % 1000,
            level,
            module,
            message
        )?;
        self.file.flush()
    }
}

static SINK: OnceLock<Option<Mutex<FileSink>>> = OnceLock::new();

fn sink() -> Option<&'static Mutex<FileSink>> {
    SINK.get_or_init(|| FileSink::from_env().map(Mutex::new)).as_ref()
}

/// Whether `FLARUM_MCP_DEBUG` asks for debug output
pub fn debug_enabled() -> bool {
    std::env::var("FLARUM_MCP_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Path of the trace file
pub fn log_file_path() -> PathBuf {
    match std::env::var("FLARUM_MCP_LOG_FILE") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => std::env::temp_dir().join("flarum-mcp-debug.log"),
    }
}

/// Append a line to the process-wide trace file, if enabled
pub fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(sink) = sink() {
        if let Ok(mut sink) = sink.lock() {
            // Tracing must never fail a request
            let _ = sink.write(level, module, message);
        }
    }
}

pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Trace at debug level, tagged with the calling module
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::debug(module_path!(), &format!($($arg)*))
    };
}

/// Trace at warn level, tagged with the calling module
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logging::file_logger::warn(module_path!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_levels() {
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("bogus"), None);
        assert!(LogLevel::Error > LogLevel::Warn);
        assert!(LogLevel::Info > LogLevel::Debug);
    }

    #[test]
    fn test_sink_threshold() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.log");
        let mut sink = FileSink::open(&path, LogLevel::Warn).unwrap();

        sink.write(LogLevel::Debug, "api::http", "GET /api/tags").unwrap();
        sink.write(LogLevel::Warn, "api::http", "status=401 body_len=80").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("GET /api/tags"));
        let line = content.lines().next().unwrap();
        assert!(line.contains("WARN"));
        assert!(line.ends_with("api::http status=401 body_len=80"));
    }

    #[test]
    fn test_sink_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trace.log");

        FileSink::open(&path, LogLevel::Debug)
            .unwrap()
            .write(LogLevel::Info, "m", "first")
            .unwrap();
        FileSink::open(&path, LogLevel::Debug)
            .unwrap()
            .write(LogLevel::Info, "m", "second")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_disabled_logging_is_silent() {
        // Without FLARUM_MCP_DEBUG this is a no-op; either way it must not panic
        debug("test", "message");
        warn("test", "message");
    }
}
