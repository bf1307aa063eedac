// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything a single run needs. Nothing here is read from globals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub baseline: PathBuf,
    pub out: PathBuf,
    pub timeout: Option<Duration>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            baseline: PathBuf::from(DEFAULT_BASELINE),
            out: PathBuf::from(DEFAULT_OUT),
            timeout: timeout_from_secs(TIMEOUT_SECS),
        }
    }
}

impl RunOptions {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_baseline(mut self, path: impl Into<PathBuf>) -> Self {
        self.baseline = path.into();
        self
    }

    pub fn with_out(mut self, path: impl Into<PathBuf>) -> Self {
        self.out = path.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = timeout_from_secs(secs);
        self
    }
}

/// `0` disables the timeout.
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
