// src/majors.rs

/// Union of both lists, exact duplicates removed, ascending code-point order.
pub fn merge(baseline: Vec<String>, scraped: Vec<String>) -> Vec<String> {
    let mut all = baseline;
    all.extend(scraped);
    all.sort_unstable();
    all.dedup();
    all
}
