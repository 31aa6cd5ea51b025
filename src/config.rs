//! Runtime configuration for the binary: `.env` loading and log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Env var naming a log4rs yaml file.
pub const LOG_CONFIG_ENV: &str = "SUBNET_CALC_LOG_CONFIG";
/// Env var with the default log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_ENV: &str = "SUBNET_CALC_LOG_LEVEL";
/// Used when `LOG_CONFIG_ENV` is not set.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Load `.env` if there is one, returning its path. Missing files are fine.
pub fn load_env() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Pick the log level from `-v` count, falling back to `LOG_LEVEL_ENV`, then `warn`.
pub fn log_level(verbose: u8, env_level: Option<&str>) -> LevelFilter {
    match verbose {
        0 => env_level
            .and_then(|l| LevelFilter::from_str(l.trim()).ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialise log4rs.
///
/// A yaml config file wins when it exists and `verbose` is then ignored, otherwise logs
/// go to stderr so stdout only carries the subnet report.
pub fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    if let Some(path) = log_config_file(std::env::var(LOG_CONFIG_ENV).ok()) {
        log4rs::init_config(file_config(&path)?)?;
        log::debug!("logging configured from {}", path.display());
        return Ok(());
    }

    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let level = log_level(verbose, env_level.as_deref());
    log4rs::init_config(stderr_config(level)?)?;
    log::debug!("logging to stderr at {level}");
    Ok(())
}

/// The yaml config to use: `env_value` or [`DEFAULT_LOG_CONFIG`], if the file exists.
pub fn log_config_file(env_value: Option<String>) -> Option<PathBuf> {
    let path = PathBuf::from(env_value.unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string()));
    path.exists().then_some(path)
}

/// Read a log4rs yaml config file.
pub fn file_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let config = log4rs::config::load_config_file(path, Default::default())
        .map_err(|e| format!("Error reading log4rs config {}: {e}", path.display()))?;
    Ok(config)
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
