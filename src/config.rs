//! Runtime settings read from the environment.

use crate::error::{ErrorKind, Result};
use crate::notice::DEFAULT_NOTICE_TIMEOUT;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_BASE_URL: &str = "ACTIVITY_BOARD_BASE_URL";
pub const ENV_NOTICE_MS: &str = "ACTIVITY_BOARD_NOTICE_MS";
pub const ENV_TIMEOUT_SECS: &str = "ACTIVITY_BOARD_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend origin, without trailing slash.
    pub base_url: String,
    pub notice_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            notice_timeout: DEFAULT_NOTICE_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            if url.trim().is_empty() {
                return Err(ErrorKind::ConfigError(format!("{ENV_BASE_URL} is empty")).into());
            }
            config = config.with_base_url(url.trim());
        }
        if let Some(ms) = lookup(ENV_NOTICE_MS) {
            config.notice_timeout = Duration::from_millis(parse_number(ENV_NOTICE_MS, &ms)?);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }

        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| ErrorKind::ConfigError(format!("{key}={value:?}: {e}")).into())
}
