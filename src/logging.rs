use crate::error::TablesError;

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: Level,
    pub target: &'a str,
    pub message: &'a str,
}

pub type LogCallback = fn(&LogRecord<'_>);

const MODE_DISABLED: u8 = 0;
const MODE_STDERR: u8 = 1;
const MODE_CALLBACK: u8 = 2;

pub struct TablesLogger {
    mode: AtomicU8,
    /// `LevelFilter` as usize; `Off` is 0 and `Level` values count up from 1.
    filter: AtomicUsize,
    callback: Mutex<Option<LogCallback>>,
}

impl TablesLogger {
    const fn new() -> Self {
        Self {
            mode: AtomicU8::new(MODE_DISABLED),
            filter: AtomicUsize::new(LevelFilter::Off as usize),
            callback: Mutex::new(None),
        }
    }

    fn set_filter(&self, filter: LevelFilter) {
        self.filter.store(filter as usize, Ordering::Relaxed);
        log::set_max_level(filter);
    }

    fn set_mode(&self, mode: u8) {
        self.mode.store(mode, Ordering::Relaxed);
    }

    fn set_callback(&self, callback: Option<LogCallback>) {
        if let Ok(mut state) = self.callback.lock() {
            *state = callback;
        }
    }
}

impl Log for TablesLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() as usize <= self.filter.load(Ordering::Relaxed)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match self.mode.load(Ordering::Relaxed) {
            MODE_STDERR => {
                eprintln!("[unicode-data-tables][{}] {}", record.level(), record.args());
            }
            MODE_CALLBACK => {
                let Ok(state) = self.callback.lock() else {
                    return;
                };
                let Some(callback) = *state else {
                    return;
                };
                let message = record.args().to_string();
                callback(&LogRecord {
                    level: record.level(),
                    target: record.target(),
                    message: &message,
                });
            }
            _ => {}
        }
    }

    fn flush(&self) {}
}

static LOGGER: TablesLogger = TablesLogger::new();
static INSTALLED: OnceLock<bool> = OnceLock::new();

/// Installs `LOGGER` once. False when another logger got there first.
fn installed() -> bool {
    *INSTALLED.get_or_init(|| {
        let ok = log::set_logger(&LOGGER).is_ok();
        if ok {
            log::set_max_level(LevelFilter::Off);
        }
        ok
    })
}

pub fn log_set_stderr(filter: LevelFilter) -> Result<(), TablesError> {
    if !installed() {
        return Err(TablesError::LoggerUnavailable);
    }
    LOGGER.set_mode(MODE_STDERR);
    LOGGER.set_filter(filter);
    Ok(())
}

pub fn log_set_callback(callback: Option<LogCallback>, filter: LevelFilter) -> Result<(), TablesError> {
    if callback.is_none() {
        return log_disable();
    }
    if !installed() {
        return Err(TablesError::LoggerUnavailable);
    }
    LOGGER.set_callback(callback);
    LOGGER.set_mode(MODE_CALLBACK);
    LOGGER.set_filter(filter);
    Ok(())
}

/// With a foreign logger installed only the global max level changes.
pub fn log_set_level(filter: LevelFilter) -> Result<(), TablesError> {
    if installed() {
        LOGGER.set_filter(filter);
    } else {
        log::set_max_level(filter);
    }
    Ok(())
}

pub fn log_disable() -> Result<(), TablesError> {
    if installed() {
        LOGGER.set_mode(MODE_DISABLED);
    }
    log_set_level(LevelFilter::Off)
}
