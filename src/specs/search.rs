//! Enrichment lookups against the Custom Search JSON API.
//!
//! Two independent, best-effort queries:
//! - **release date**: `"<title> release date India"`, top 3 results, first
//!   date-shaped substring in `snippet + " " + title`.
//! - **actor image**: `"<name> actor"` as an image search, first result link.
//!
//! Both return `Result<Option<String>, SearchError>`; the caller decides what
//! a failure means (it always means "keep the sentinel").

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{consts, options::SearchOptions};
use crate::core::{FetchError, Fetcher, Transport, sanitize::search_safe};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("search response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    pub link: Option<String>,
}

/// The two lookups the extractor may ask for.
pub trait Enricher {
    fn release_date(&self, title: &str) -> Result<Option<String>, SearchError>;
    fn actor_image(&self, name: &str) -> Result<Option<String>, SearchError>;
}

/// Never looks anything up.
pub struct NoEnrichment;

impl Enricher for NoEnrichment {
    fn release_date(&self, _title: &str) -> Result<Option<String>, SearchError> {
        Ok(None)
    }
    fn actor_image(&self, _name: &str) -> Result<Option<String>, SearchError> {
        Ok(None)
    }
}

pub struct GoogleSearch<'a, T> {
    fetcher: &'a Fetcher<T>,
    opts: &'a SearchOptions,
}

impl<'a, T: Transport> GoogleSearch<'a, T> {
    pub fn new(fetcher: &'a Fetcher<T>, opts: &'a SearchOptions) -> Self {
        Self { fetcher, opts }
    }

    fn query(&self, extra: Vec<(&'static str, String)>) -> Result<SearchResponse, SearchError> {
        let mut params = vec![
            ("cx", self.opts.cx.clone()),
            ("key", self.opts.api_key.clone()),
        ];
        params.extend(extra);
        let page = self.fetcher.get_with_query(consts::SEARCH_ENDPOINT, &params)?;
        Ok(serde_json::from_str(&page.body)?)
    }
}

impl<T: Transport> Enricher for GoogleSearch<'_, T> {
    fn release_date(&self, title: &str) -> Result<Option<String>, SearchError> {
        if !self.opts.enabled() {
            debug!("search credentials missing; skipping release date lookup");
            return Ok(None);
        }
        let q = format!("{title} {}", consts::RELEASE_DATE_QUERY_SUFFIX);
        let resp = self.query(vec![
            ("q", q),
            ("num", consts::RELEASE_DATE_RESULTS.to_string()),
        ])?;
        Ok(find_release_date(&resp.items))
    }

    fn actor_image(&self, name: &str) -> Result<Option<String>, SearchError> {
        let clean = search_safe(name);
        if clean.is_empty() || !self.opts.enabled() {
            return Ok(None);
        }
        let resp = self.query(vec![
            ("q", format!("{clean} {}", consts::ACTOR_QUERY_SUFFIX)),
            ("searchType", s!("image")),
            ("imgSize", s!("large")),
            ("num", s!("1")),
        ])?;
        Ok(resp
            .items
            .into_iter()
            .next()
            .and_then(|item| item.link)
            .filter(|link| !link.trim().is_empty()))
    }
}

static DATE_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    const MON: &str = "(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)";
    [
        Regex::new(&format!(r"\b\d{{1,2}}\s{MON}\s\d{{4}}\b")).expect("day-month-year"),
        Regex::new(&format!(r"\b{MON}\s\d{{1,2}},\s\d{{4}}\b")).expect("month-day-year"),
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").expect("iso date"),
    ]
});

/// Scan items in order; within an item try `D Mon YYYY`, `Mon D, YYYY`,
/// `YYYY-MM-DD` in that order. First hit wins.
pub fn find_release_date(items: &[SearchItem]) -> Option<String> {
    items.iter().find_map(|item| {
        let text = join!(&item.snippet, " ", &item.title);
        DATE_PATTERNS
            .iter()
            .find_map(|re| re.find(&text))
            .map(|m| s!(m.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(snippet: &str, title: &str) -> SearchItem {
        SearchItem { title: s!(title), snippet: s!(snippet), link: None }
    }

    #[test]
    fn each_date_shape_matches_on_its_own() {
        for (text, want) in [
            ("Releasing on 15 Aug 2024 in theatres", "15 Aug 2024"),
            ("Releasing on Aug 15, 2024 in theatres", "Aug 15, 2024"),
            ("release: 2024-08-15", "2024-08-15"),
        ] {
            assert_eq!(find_release_date(&[item(text, "")]).as_deref(), Some(want));
        }
    }

    #[test]
    fn no_date_anywhere_is_none() {
        let items = [item("coming soon", "Movie"), item("", "Trailer out now")];
        assert_eq!(find_release_date(&items), None);
        assert_eq!(find_release_date(&[]), None);
    }

    #[test]
    fn pattern_order_beats_position_within_an_item() {
        // ISO date appears first in the text but D Mon YYYY is tried first.
        let items = [item("2023-01-02 then 5 Jan 2024", "")];
        assert_eq!(find_release_date(&items).as_deref(), Some("5 Jan 2024"));
    }

    #[test]
    fn earlier_item_wins_and_title_is_scanned() {
        let items = [item("nothing here", "Out Dec 25, 2025"), item("1 Jan 2026", "")];
        assert_eq!(find_release_date(&items).as_deref(), Some("Dec 25, 2025"));
    }

    #[test]
    fn full_month_names_do_not_match() {
        assert_eq!(find_release_date(&[item("15 August 2024", "")]), None);
    }

    #[test]
    fn response_without_items_decodes() {
        let resp: SearchResponse = serde_json::from_str(r#"{"kind":"customsearch#search"}"#).unwrap();
        assert!(resp.items.is_empty());
    }
}
