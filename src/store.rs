// src/store.rs
use std::{fs, path::Path};

use tracing::info;

use crate::config::consts::NOISE_MARKERS;
use crate::error::{MajorsError, Result};

/// Heading/link rows copied along with the curated list.
pub fn is_noise(line: &str) -> bool {
    NOISE_MARKERS.iter().any(|m| line.contains(m))
}

/// One entry per line, nothing but the terminator trimmed. `\n`, `\r\n`
/// and a lone `\r` all end a line. Empty lines are kept.
pub fn parse_baseline(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.lines()
        .filter(|l| !is_noise(l))
        .map(str::to_string)
        .collect()
}

pub fn load_baseline(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| MajorsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let list = parse_baseline(&text);
    info!(path = %path.display(), entries = list.len(), "baseline loaded");
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_rows_are_dropped() {
        let text = "Biology\nCollege of Science\nView All Majors\nChemistry\n";
        assert_eq!(parse_baseline(text), vec!["Biology", "Chemistry"]);
    }

    #[test]
    fn markers_match_anywhere_in_line() {
        assert!(is_noise("Khoury College of Computer Sciences"));
        assert!(is_noise("Please View All Majors"));
        // case-sensitive
        assert!(!is_noise("Preview"));
        assert!(!is_noise("college of science"));
    }

    #[test]
    fn only_terminators_are_stripped() {
        let text = "  Padded  \r\nLast line without newline";
        assert_eq!(parse_baseline(text), vec!["  Padded  ", "Last line without newline"]);
    }

    #[test]
    fn bare_carriage_returns_end_lines() {
        assert_eq!(parse_baseline("Biology\rChemistry\r"), vec!["Biology", "Chemistry"]);
        assert_eq!(parse_baseline("Biology\r\nChemistry\r"), vec!["Biology", "Chemistry"]);
        assert_eq!(parse_baseline("A\r\rB"), vec!["A", "", "B"]);
    }

    #[test]
    fn blank_lines_survive() {
        assert_eq!(parse_baseline("A\n\nB\n"), vec!["A", "", "B"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = load_baseline(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, MajorsError::FileRead { .. }));
    }
}
