// src/core/sanitize.rs

use super::html::AnchorRecord;
use crate::config::consts::{MATCH_OPEN, MATCH_WORD};

/// Combined-major heuristic: contains "and" and an opening paren.
/// Case-sensitive substring checks; "Brandeis (tour)" passes too.
pub fn is_major_candidate(text: &str) -> bool {
    text.contains(MATCH_WORD) && text.contains(MATCH_OPEN)
}

/// Drop the trailing token (usually the degree, e.g. "(BSCS/MBA)") and
/// collapse whitespace. A one-token input yields "".
pub fn strip_degree(text: &str) -> String {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.split_last() {
        Some((_, head)) => head.join(" "),
        None => String::new(),
    }
}

/// Trimmed texts of the anchors that pass the heuristic, in document order.
pub fn matched_texts<I>(anchors: I) -> Vec<String>
where
    I: IntoIterator<Item = AnchorRecord>,
{
    anchors
        .into_iter()
        .filter(|a| is_major_candidate(&a.text))
        .map(|a| a.text.trim().to_string())
        .collect()
}

pub fn normalize_all(matched: &[String]) -> Vec<String> {
    matched.iter().map(|t| strip_degree(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(text: &str) -> AnchorRecord {
        AnchorRecord {
            href: None,
            text: text.to_string(),
        }
    }

    #[test]
    fn candidate_needs_both_markers() {
        assert!(is_major_candidate("Computer Science and Business Administration (BSCS/MBA)"));
        assert!(!is_major_candidate("About Us"));
        assert!(!is_major_candidate("Physics and Math"));
        assert!(!is_major_candidate("Physics (BS)"));
        // Case-sensitive
        assert!(!is_major_candidate("Physics AND Math (BS)"));
    }

    #[test]
    fn heuristic_keeps_false_positives() {
        // "and" inside another word still counts
        assert!(is_major_candidate("Landscape (photo)"));
    }

    #[test]
    fn strip_degree_drops_last_token() {
        assert_eq!(
            strip_degree("Computer Science and Business Administration (BSCS/MBA)"),
            "Computer Science and Business Administration"
        );
        assert_eq!(strip_degree("  Art \n and\tDesign  (BFA) "), "Art and Design");
    }

    #[test]
    fn strip_degree_single_token_is_empty() {
        assert_eq!(strip_degree("Standalone(BS)"), "");
        assert_eq!(strip_degree("   "), "");
    }

    #[test]
    fn matched_texts_filters_and_trims() {
        let got = matched_texts(vec![
            anchor("  Biology and Chemistry (BS)\n"),
            anchor("Home"),
            anchor("Apply"),
            anchor("Math and Physics (BS)"),
        ]);
        assert_eq!(got, vec!["Biology and Chemistry (BS)", "Math and Physics (BS)"]);
        assert_eq!(normalize_all(&got), vec!["Biology and Chemistry", "Math and Physics"]);
    }
}
