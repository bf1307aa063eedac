// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Every failure is fatal to the run; callers just propagate.
#[derive(Debug, Error)]
pub enum MajorsError {
    #[error("invalid url {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("html parse failed: {0}")]
    Parse(String),

    #[error("cannot read baseline {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("json encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T, E = MajorsError> = std::result::Result<T, E>;
