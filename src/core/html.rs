// src/core/html.rs
use scraper::{Html, Selector};

use crate::error::{MajorsError, Result};

/// One `<a>` element. Lives only until filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorRecord {
    pub href: Option<String>,
    pub text: String,
}

/// Parsed page, ready to hand out its anchors.
pub struct Document {
    html: Html,
    anchor: Selector,
}

impl Document {
    pub fn parse(body: &str) -> Result<Self> {
        let anchor = Selector::parse("a").map_err(|e| MajorsError::Parse(e.to_string()))?;
        Ok(Self {
            html: Html::parse_document(body),
            anchor,
        })
    }

    /// Every anchor in document order. Text is all descendant text nodes
    /// concatenated, untrimmed.
    pub fn anchors(&self) -> impl Iterator<Item = AnchorRecord> + '_ {
        self.html.select(&self.anchor).map(|a| AnchorRecord {
            href: a.value().attr("href").map(str::to_string),
            text: a.text().collect(),
        })
    }
}
