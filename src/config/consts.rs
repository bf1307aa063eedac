// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://admissions.northeastern.edu/academics/combined-majors";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/118.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
pub const TIMEOUT_SECS: u64 = 30; // 0 = wait forever

// Scrape heuristic
pub const MATCH_WORD: &str = "and";
pub const MATCH_OPEN: char = '(';

// Baseline rows containing any of these are headings/links, not majors
pub const NOISE_MARKERS: [&str; 2] = ["College", "View"];

// Local files
pub const DEFAULT_BASELINE: &str = "Data/raw.txt";
pub const DEFAULT_OUT: &str = "Data/combineMajor.json";
