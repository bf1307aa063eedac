// src/runner.rs
use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    config::RunOptions,
    core::{net, sanitize, Document},
    error::Result,
    file::write_json_list,
    majors, store,
};

/// Optional progress sink for the front end.
/// The CLI prints these; tests usually pass `None`.
pub trait Progress {
    fn fetched(&mut self, _status: u16, _url: &str) {}
    fn matched(&mut self, _text: &str) {}
    fn finish(&mut self, _summary: &RunSummary) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub status: u16,
    pub anchors: usize,
    pub matched: Vec<String>,
    pub baseline: usize,
    pub majors: Vec<String>,
    pub out: PathBuf,
}

/// Anchors seen on the page and the ones that passed the heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scraped {
    pub anchors: usize,
    pub matched: Vec<String>,
}

/// Parse + filter stage, independent of the network.
pub fn scrape_page(body: &str) -> Result<Scraped> {
    let doc = Document::parse(body)?;
    let mut anchors = 0usize;
    let matched = sanitize::matched_texts(doc.anchors().inspect(|_| anchors += 1));
    Ok(Scraped { anchors, matched })
}

/// fetch → parse → filter → normalize → merge → write.
/// Any error aborts before the output file is touched.
pub fn run(
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let resp = net::send(&opts.url, opts.timeout)?;
    // Status goes out before the non-2xx check
    if let Some(p) = progress.as_deref_mut() {
        p.fetched(resp.status().as_u16(), &opts.url);
    }
    let page = net::read_body(&opts.url, resp)?;

    let Scraped { anchors, matched } = scrape_page(&page.body)?;
    info!(anchors, matched = matched.len(), "filtered");
    for text in &matched {
        debug!(text = %text, "matched");
        if let Some(p) = progress.as_deref_mut() {
            p.matched(text);
        }
    }

    let scraped = sanitize::normalize_all(&matched);
    let baseline = store::load_baseline(&opts.baseline)?;
    let baseline_len = baseline.len();
    let merged = majors::merge(baseline, scraped);
    info!(baseline = baseline_len, combined = merged.len(), "merged");

    write_json_list(&opts.out, &merged)?;

    let summary = RunSummary {
        status: page.status,
        anchors,
        matched,
        baseline: baseline_len,
        majors: merged,
        out: opts.out.clone(),
    };
    if let Some(p) = progress.as_deref_mut() {
        p.finish(&summary);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrape_page_counts_all_anchors() {
        let html = r#"
            <nav><a href="/">Home</a><a href="/apply">Apply</a></nav>
            <ul>
              <li><a href="/m/1">Biology and Chemistry (BS)</a></li>
              <li><a href="/m/2">Data Science and Physics (BS)</a></li>
            </ul>
        "#;
        let s = scrape_page(html).unwrap();
        assert_eq!(s.anchors, 4);
        assert_eq!(
            s.matched,
            vec!["Biology and Chemistry (BS)", "Data Science and Physics (BS)"]
        );
    }

    #[test]
    fn page_without_links_is_empty() {
        let s = scrape_page("<p>nothing here</p>").unwrap();
        assert_eq!(
            s,
            Scraped {
                anchors: 0,
                matched: vec![]
            }
        );
    }
}
