// src/scrape.rs
use tracing::{error, info};

use crate::{
    config::{AppOptions, consts::FETCH_FAILED},
    core::{Fetcher, HttpTransport, Transport},
    data::ResultEnvelope,
    specs::{
        movie::Extractor,
        search::{Enricher, GoogleSearch},
    },
};

/// Top-level: fetch the listing for `slug`, extract it, wrap the outcome.
/// Never fails; every error ends up as a failure envelope.
pub fn run(slug: &str, opts: &AppOptions) -> ResultEnvelope {
    match HttpTransport::new(opts.fetch.timeout) {
        Ok(transport) => run_with(slug, opts, transport),
        Err(e) => {
            error!("{e}");
            ResultEnvelope::failure(e.to_string())
        }
    }
}

/// Same as `run`, over any transport (tests hand in a fake).
pub fn run_with<T: Transport>(slug: &str, opts: &AppOptions, transport: T) -> ResultEnvelope {
    let fetcher = Fetcher::new(transport, opts.fetch.clone());
    let search = GoogleSearch::new(&fetcher, &opts.search);
    scrape_movie(slug, opts, &fetcher, &search)
}

pub fn scrape_movie<T: Transport>(
    slug: &str,
    opts: &AppOptions,
    fetcher: &Fetcher<T>,
    enrich: &dyn Enricher,
) -> ResultEnvelope {
    let url = opts.page.listing_url(slug);
    info!(slug, url = %url, "fetching listing");

    let page = match fetcher.get(&url) {
        Ok(page) => page,
        Err(e) => {
            error!(slug, "{e}");
            return ResultEnvelope::failure(FETCH_FAILED);
        }
    };

    let extracted = Extractor::new(&opts.page, enrich, opts.search.use_images)
        .and_then(|x| x.extract(&page.body, slug));
    match extracted {
        Ok(movie) => {
            info!(slug, cast = movie.cast.len(), "extracted \"{}\"", movie.title);
            ResultEnvelope::Success(movie)
        }
        Err(e) => {
            error!(slug, "extraction failed: {e}");
            ResultEnvelope::failure(e.to_string())
        }
    }
}
