use std::{
    io::Write,
    sync::{OnceLock, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn get_logger() -> &'static StderrLogger {
    // default configuration, replaced once settings are read
    let level = LevelFilter::Warn;

    LOGGER.get_or_init(|| StderrLogger::new(level))
}

/// Installs the global logger. Everything is forwarded to it and filtered by
/// its own level, so the level can change after installation.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(get_logger())?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Writes `LEVEL [module] message` lines to stderr.
pub struct StderrLogger {
    min_level: RwLock<LevelFilter>,
}

impl StderrLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        // a poisoned lock still holds a valid level
        *self
            .min_level
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self
            .min_level
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }
}

fn format_record(record: &Record) -> String {
    format!(
        "{:<5} [{}] {}",
        record.level(),
        record.module_path().unwrap_or("unknown"),
        record.args()
    )
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
