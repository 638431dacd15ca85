//! File logging for the terminal binary.
//!
//! The terminal is owned by the renderer, so log records can only go to a
//! file. Logging stays off unless `TETRIS_LOG_PATH` is set.

use anyhow::{anyhow, Result};
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub const LOG_PATH_ENV: &str = "TETRIS_LOG_PATH";
pub const LOG_LEVEL_ENV: &str = "TETRIS_LOG_LEVEL";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: Option<String>,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. An unknown level keeps the
    /// default rather than failing startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup(LOG_PATH_ENV).filter(|p| !p.trim().is_empty());
        let level = lookup(LOG_LEVEL_ENV)
            .and_then(|raw| parse_level(&raw))
            .unwrap_or(LevelFilter::Info);
        Self { path, level }
    }
}

/// Parse a level name, case-insensitively.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Install the file logger. Returns `Ok(false)` when logging is disabled.
pub fn init_log(config: &LogConfig) -> Result<bool> {
    let Some(path) = config.path.as_deref() else {
        return Ok(false);
    };
    if config.level == LevelFilter::Off {
        return Ok(false);
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(path)?;
    let log_config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(config.level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(config.level))?;
    log4rs::init_config(log_config).map_err(|e| anyhow!("logger already installed: {e}"))?;
    Ok(true)
}
