//! Console Logger
//!
//! `log` backend for the browser. Records go to `console.*` on wasm32
//! (stderr elsewhere) and the most recent ones are kept in a circular buffer
//! so they can be read back from the page.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// One formatted log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub level: Level,
    pub text: String,
}

/// Bounded FIFO of recent records
#[derive(Debug)]
pub struct LogBuffer {
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn push(&self, line: LogLine) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Snapshot, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: LogBuffer::new(capacity),
        }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{} [{} {}] {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, text: &str) {
    use web_sys::console;
    let value = wasm_bindgen::JsValue::from_str(text);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::log_1(&value),
        Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, text: &str) {
    eprintln!("{}", text);
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = format_record(record);
        emit(record.level(), &text);
        self.buffer.push(LogLine { level: record.level(), text });
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger. Safe to call more than once; later calls are no-ops.
pub fn init(level: LevelFilter, capacity: usize) {
    let mut installed = false;
    let logger = LOGGER.get_or_init(|| {
        installed = true;
        ConsoleLogger::new(level, capacity)
    });
    if installed && log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Recent records captured by the global logger, oldest first
pub fn recent() -> Vec<LogLine> {
    LOGGER
        .get()
        .map(|logger| logger.buffer().snapshot())
        .unwrap_or_default()
}
