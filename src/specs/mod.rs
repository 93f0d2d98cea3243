//! # Scraping "specs" module
//!
//! Page-specific knowledge lives here: *where the ground truth sits in the
//! HTML* and *which secondary lookups may fill the gaps*.
//!
//! ## What lives here
//! - **HTML parsing** of the movie listing (`movie`), built on `scraper`
//!   selectors. Class names are tied to the current page layout; when they
//!   drift, fields come back as their sentinel values rather than errors.
//! - **Enrichment** (`search`): release date and actor image lookups.
//!
//! ## What does **not** live here
//! - **Fetching the page** (`core::net`), **the envelope** and **CLI**
//!   handling (`scrape`, `cli`).
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::run → Fetcher::get(listing url)
//!                   ↘ specs::movie::Extractor::extract → specs::search (optional)
//! ```
pub mod movie;
pub mod search;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: &'static str, reason: String },
    #[error("bad image url {src:?}: {reason}")]
    ImageUrl { src: String, reason: String },
}
