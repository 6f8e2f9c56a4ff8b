use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use log::LevelFilter;
use snafu::ResultExt;

use crate::errors::{CustomResult, InvalidConfigSnafu, MissingConfigSnafu};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub database_url: String,
    pub redis_url: Option<String>,
    pub cache_enabled: bool,
    pub cache_ttl: Duration,
    pub logging_level: LevelFilter,
    pub log_file: String,
}

impl Settings {
    /// # load settings
    /// read the settings from the `.env` file and the environment.
    /// only `DATABASE_URL` is required.
    pub fn from_env() -> CustomResult<Settings> {
        dotenv().ok();

        Settings::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> CustomResult<Settings>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let database_url = lookup("DATABASE_URL").context(MissingConfigSnafu { key: "DATABASE_URL" })?;

        let redis_url = lookup("REDIS_URL").ok().filter(|e| !e.is_empty());

        let cache_enabled = match lookup("CACHE_ENABLED") {
            Ok(value) => parse_bool("CACHE_ENABLED", &value)?,
            Err(_) => true,
        };

        let cache_ttl = match lookup("CACHE_TTL_SECONDS") {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(seconds) => Duration::from_secs(seconds),
                Err(_) => return InvalidConfigSnafu { key: "CACHE_TTL_SECONDS", value }.fail(),
            },
            Err(_) => DEFAULT_CACHE_TTL,
        };

        let logging_level = match lookup("LOGGING_LEVEL") {
            Ok(value) => parse_level(&value),
            Err(_) => LevelFilter::Info,
        };

        let log_file = lookup("LOG_FILE").unwrap_or_else(|_| "program.log".to_string());

        Ok(Settings {
            database_url,
            redis_url,
            cache_enabled,
            cache_ttl,
            logging_level,
            log_file,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> CustomResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => InvalidConfigSnafu { key, value }.fail(),
    }
}

/// unknown levels fall back to info
pub fn parse_level(verbosity: &str) -> LevelFilter {
    match verbosity.trim().to_ascii_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
