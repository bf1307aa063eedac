// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::{consts::*, RunOptions};
use crate::error::Result;
use crate::runner::{self, Progress, RunSummary};

/// With no arguments this is the fixed run: default URL, `Data/raw.txt`
/// in, `Data/combineMajor.json` out.
#[derive(Debug, Parser)]
#[command(
    name = "combined_majors",
    version,
    about = "Scrape combined majors and merge them into a JSON list"
)]
pub struct Cli {
    /// Page listing the combined majors
    #[arg(long, env = "MAJORS_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Curated list, one major per line
    #[arg(short, long, env = "MAJORS_BASELINE", default_value = DEFAULT_BASELINE)]
    pub baseline: PathBuf,

    /// JSON output (directory must exist)
    #[arg(short, long, env = "MAJORS_OUT", default_value = DEFAULT_OUT)]
    pub out: PathBuf,

    /// Request timeout in seconds, 0 to wait forever
    #[arg(long, env = "MAJORS_TIMEOUT_SECS", default_value_t = TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Don't print the response status and matched links
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        RunOptions::default()
            .with_url(&self.url)
            .with_baseline(&self.baseline)
            .with_out(&self.out)
            .with_timeout_secs(self.timeout_secs)
    }
}

/// Prints to stdout as the run goes.
struct StdoutProgress;

impl Progress for StdoutProgress {
    fn fetched(&mut self, status: u16, _url: &str) {
        println!("<Response [{status}]>");
    }
    fn matched(&mut self, text: &str) {
        println!("Link Text: {text}");
    }
    fn finish(&mut self, summary: &RunSummary) {
        println!("{} combined majors -> {}", summary.majors.len(), summary.out.display());
    }
}

pub fn run(cli: &Cli) -> Result<RunSummary> {
    let opts = cli.options();
    if cli.quiet {
        runner::run(&opts, None)
    } else {
        let mut sink = StdoutProgress;
        runner::run(&opts, Some(&mut sink as &mut dyn Progress))
    }
}
