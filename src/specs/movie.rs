//! Page knowledge for a movie listing.
//!
//! Purpose:
//! - Parse the **remote HTML** of `/movies/<city>/<slug>` into a `MovieRecord`.
//! - Every field resolves to something: a missing selector match becomes its
//!   sentinel (`"N/A"`, the default poster, the placeholder actor image).
//!
//! Background precedence (exactly this order):
//! 1. `img[src*='/movies/images/cover/']`
//! 2. first `[style*='background-image']` with a `url(...)`
//! 3. the poster
//!
//! Cast blocks are handled one at a time; a block that fails (an image `src`
//! that looks absolute but isn't a URL) is logged and dropped, a block
//! without a name is dropped quietly.

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::{consts::*, options::PageOptions};
use crate::core::html::{attr, css_url, stripped_text, text_of};
use crate::core::sanitize::strip_role_prefix;
use crate::data::{CastMember, MovieRecord};

use super::ExtractError;
use super::search::Enricher;

/// Cast selectors, compiled once per extractor.
struct CastSelectors {
    block: Selector,
    heading: Selector,
    image: Selector,
}

impl CastSelectors {
    fn compile() -> Result<Self, ExtractError> {
        Ok(Self {
            block: sel!(SEL_CAST_BLOCK)?,
            heading: sel!(SEL_CAST_HEADING)?,
            image: sel!(SEL_CAST_IMAGE)?,
        })
    }
}

pub struct Extractor<'a> {
    page: &'a PageOptions,
    enrich: &'a dyn Enricher,
    image_lookup: bool,
    cast_sel: CastSelectors,
}

impl<'a> Extractor<'a> {
    /// `image_lookup` turns on actor-image search for cast without a page image.
    pub fn new(
        page: &'a PageOptions,
        enrich: &'a dyn Enricher,
        image_lookup: bool,
    ) -> Result<Self, ExtractError> {
        Ok(Self { page, enrich, image_lookup, cast_sel: CastSelectors::compile()? })
    }

    pub fn extract(&self, html: &str, slug: &str) -> Result<MovieRecord, ExtractError> {
        let doc = Html::parse_document(html);

        let title = title(&doc, slug)?;
        let rating = rating(&doc)?;
        let format_language = format_language(&doc)?;
        let release_date = self.release_date(&title);
        let cast = self.cast(&doc);
        let poster = poster(&doc)?.unwrap_or_else(|| self.page.default_poster.clone());
        let background = background(&doc)?.unwrap_or_else(|| poster.clone());

        Ok(MovieRecord {
            title,
            rating,
            release_date,
            format_language,
            cast,
            poster,
            background,
        })
    }

    fn release_date(&self, title: &str) -> String {
        match self.enrich.release_date(title) {
            Ok(Some(date)) => {
                debug!(title, date = %date, "release date resolved");
                date
            }
            Ok(None) => s!(NOT_AVAILABLE),
            Err(e) => {
                warn!(title, "release date lookup failed: {e}");
                s!(NOT_AVAILABLE)
            }
        }
    }

    fn cast(&self, doc: &Html) -> Vec<CastMember> {
        let mut out = Vec::new();

        for (i, block) in doc.select(&self.cast_sel.block).enumerate() {
            match self.cast_member(block) {
                Ok(Some(member)) => out.push(member),
                Ok(None) => debug!(block = i, "cast block without a name; skipped"),
                Err(e) => warn!(block = i, "error processing cast block: {e}"),
            }
        }
        out
    }

    /// `Ok(None)` when the block has no name heading (or it's blank).
    pub fn cast_member(&self, block: ElementRef<'_>) -> Result<Option<CastMember>, ExtractError> {
        let mut headings = block.select(&self.cast_sel.heading);
        let Some(name) = headings.next().map(stripped_text).filter(|n| !n.is_empty()) else {
            return Ok(None);
        };
        let role = headings.next().map(|h| strip_role_prefix(&stripped_text(h)));

        let mut image = match block.select(&self.cast_sel.image).next() {
            Some(img) => image_src(img)?,
            None => None,
        };

        if image.is_none() && self.image_lookup {
            image = self.actor_image(&name);
        }

        Ok(Some(CastMember {
            name,
            role,
            image: image.unwrap_or_else(|| self.page.default_actor_image.clone()),
        }))
    }

    fn actor_image(&self, name: &str) -> Option<String> {
        match self.enrich.actor_image(name) {
            Ok(found) => found,
            Err(e) => {
                warn!(actor = name, "image lookup failed: {e}");
                None
            }
        }
    }
}

/// The `src` of a cast image. Relative and protocol-relative paths pass as-is;
/// anything with a scheme must parse as a URL.
fn image_src(img: ElementRef<'_>) -> Result<Option<String>, ExtractError> {
    let Some(src) = attr(img, "src") else {
        return Ok(None);
    };
    if src.contains("://") && !src.starts_with("//") {
        Url::parse(src).map_err(|e| ExtractError::ImageUrl { src: s!(src), reason: e.to_string() })?;
    }
    Ok(Some(s!(src)))
}

/// First `h1`, or the slug when there is none (or it's blank).
pub fn title(doc: &Html, slug: &str) -> Result<String, ExtractError> {
    let sel = sel!(SEL_TITLE)?;
    Ok(doc
        .select(&sel)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| s!(slug)))
}

pub fn rating(doc: &Html) -> Result<String, ExtractError> {
    let sel = sel!(SEL_RATING)?;
    Ok(doc
        .select(&sel)
        .next()
        .map(text_of)
        .unwrap_or_else(|| s!(NOT_AVAILABLE)))
}

pub fn format_language(doc: &Html) -> Result<Vec<String>, ExtractError> {
    let sel = sel!(SEL_FORMAT_LANGUAGE)?;
    Ok(doc.select(&sel).map(text_of).collect())
}

pub fn poster(doc: &Html) -> Result<Option<String>, ExtractError> {
    let sel = sel!(SEL_POSTER)?;
    Ok(doc
        .select(&sel)
        .find_map(|img| attr(img, "src"))
        .map(str::to_string))
}

/// Tiers 1 and 2 of the background chain; the caller supplies the poster.
pub fn background(doc: &Html) -> Result<Option<String>, ExtractError> {
    let cover_sel = sel!(SEL_COVER)?;
    if let Some(src) = doc.select(&cover_sel).find_map(|img| attr(img, "src")) {
        return Ok(Some(s!(src)));
    }

    let style_sel = sel!(SEL_INLINE_BACKGROUND)?;
    Ok(doc
        .select(&style_sel)
        .next()
        .and_then(|el| el.value().attr("style"))
        .and_then(css_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::search::NoEnrichment;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn title_falls_back_to_slug() {
        assert_eq!(title(&doc("<h1> Stree 2 </h1>"), "stree-2").unwrap(), "Stree 2");
        assert_eq!(title(&doc("<h2>Nope</h2>"), "stree-2").unwrap(), "stree-2");
        assert_eq!(title(&doc("<h1>  </h1>"), "stree-2").unwrap(), "stree-2");
    }

    #[test]
    fn rating_needs_the_labelled_heading() {
        assert_eq!(rating(&doc(r#"<h5 class="sc-ycjzp1-4 x">UA13+</h5>"#)).unwrap(), "UA13+");
        assert_eq!(rating(&doc("<h5>UA13+</h5>")).unwrap(), "N/A");
    }

    #[test]
    fn format_language_needs_both_classes() {
        let d = doc(r#"
            <a class="sc-2k6tnd-2 eUdyhJ"> 2D </a>
            <a class="sc-2k6tnd-2">IMAX</a>
            <a class="sc-2k6tnd-2 eUdyhJ">Hindi</a>
        "#);
        assert_eq!(format_language(&d).unwrap(), vec!["2D", "Hindi"]);
        assert!(format_language(&doc("")).unwrap().is_empty());
    }

    #[test]
    fn poster_matches_thumbnail_path_only() {
        let d = doc(r#"
            <img src="/movies/images/cover/c.jpg">
            <img src="https://cdn/movies/images/mobile/thumbnail/p.jpg">
        "#);
        assert_eq!(poster(&d).unwrap().as_deref(), Some("https://cdn/movies/images/mobile/thumbnail/p.jpg"));
        assert_eq!(poster(&doc("<img src='/x.jpg'>")).unwrap(), None);
    }

    #[test]
    fn cast_member_fields() {
        let page = PageOptions::default();
        let x = Extractor::new(&page, &NoEnrichment, false).unwrap();
        let d = doc(r#"
            <a class="sc-17p4id8-0 chrvLp"><img src="/a.jpg"><h5>Rajkummar Rao</h5><h5>as Vicky</h5></a>
            <a class="sc-17p4id8-0 chrvLp"><h5>Amar Kaushik</h5></a>
            <a class="sc-17p4id8-0 chrvLp"><img src=""><p>no heading</p></a>
        "#);
        let cast = x.cast(&d);
        assert_eq!(cast.len(), 2);
        assert_eq!(cast[0], CastMember { name: s!("Rajkummar Rao"), role: Some(s!("Vicky")), image: s!("/a.jpg") });
        assert_eq!(cast[1], CastMember { name: s!("Amar Kaushik"), role: None, image: s!(DEFAULT_ACTOR_IMAGE) });
    }

    #[test]
    fn broken_image_url_drops_only_that_block() {
        let page = PageOptions::default();
        let x = Extractor::new(&page, &NoEnrichment, false).unwrap();
        let d = doc(r#"
            <a class="sc-17p4id8-0 chrvLp"><img src="https://[cdn/a.jpg"><h5>Broken Link</h5></a>
            <a class="sc-17p4id8-0 chrvLp"><img src="//cdn/b.jpg"><h5>Pankaj Tripathi</h5></a>
            <a class="sc-17p4id8-0 chrvLp"><img src="https://cdn/c.jpg"><h5>Abhishek Banerjee</h5></a>
        "#);

        let blocks: Vec<_> = d.select(&x.cast_sel.block).collect();
        assert!(matches!(x.cast_member(blocks[0]), Err(ExtractError::ImageUrl { .. })));

        let cast = x.cast(&d);
        let names: Vec<&str> = cast.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Pankaj Tripathi", "Abhishek Banerjee"]);
        assert_eq!(cast[0].image, "//cdn/b.jpg");
    }
}
