// src/lib.rs

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod file;
pub mod majors;
pub mod runner;
pub mod store;

pub use config::RunOptions;
pub use error::{MajorsError, Result};
pub use runner::{run, NullProgress, Progress, RunSummary};
