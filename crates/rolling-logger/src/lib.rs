//! Rolling Logger
//!
//! A `log::Log` backend for browser frontends. Every record is written to the
//! browser console (stderr off wasm) and the last `capacity` formatted lines
//! are kept in memory so they can be inspected or attached to a bug report.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Console logger with a circular buffer of recent lines
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Install a global logger. Only the first call wins.
    pub fn init(capacity: usize, level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level));
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    /// Buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push_line(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] {}: {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: log::Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        log::Level::Error => web_sys::console::error_1(&value),
        log::Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: log::Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn emit(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_buffer_keeps_latest_lines() {
        let logger = RollingLogger::new(2, LevelFilter::Info);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test: two"));
        assert!(lines[1].ends_with("test: three"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        emit(&logger, Level::Info, "quiet");
        emit(&logger, Level::Warn, "loud");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[WARN]"));
    }
}
