//! Stderr backend for the `log` facade

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the maximum log level (`error` .. `trace`, or `off`)
pub const LOG_ENV: &str = "LINKOPENER_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a log level setting, falling back to `info`
pub fn level_from_setting(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with the level from [`LOG_ENV`]
pub fn init() {
    let level = level_from_setting(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
