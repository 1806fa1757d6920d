//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! (stderr off wasm32) and the most recent lines are kept in a circular
//! buffer so they can be inspected or attached to a bug report.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept in memory by default
pub const DEFAULT_CAPACITY: usize = 500;

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn remember(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line.to_string());
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, &self.app_name, record.level(), record.target(), &record.args().to_string());
        write_console(record.level(), &line);
        self.remember(&line);
    }

    fn flush(&self) {}
}

/// `[12:00:01.250] INFO TaskBoard/taskboard_client::session: message`
pub fn format_line(timestamp: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}/{}: {}", timestamp, level, app_name, target, message)
}

/// Level from `TASKBOARD_LOG` at build time; debug builds default to `debug`
pub fn level_from_env() -> LevelFilter {
    option_env!("TASKBOARD_LOG")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info })
}

static LOGGER: std::sync::OnceLock<ConsoleLogger> = std::sync::OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(app_name, level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Buffered lines of the global logger, empty before [`init_logger`]
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent_lines).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("taskboard_ui::pages")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_line_format() {
        let line = format_line("09:15:00.042", "TaskBoard", Level::Warn, "session", "expired");
        assert_eq!(line, "[09:15:00.042] WARN  TaskBoard/session: expired");
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = ConsoleLogger::new("TaskBoard", LevelFilter::Trace, 2);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_records_below_level_are_skipped() {
        let logger = ConsoleLogger::new("TaskBoard", LevelFilter::Warn, 10);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Error, "failure");

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
    }
}
