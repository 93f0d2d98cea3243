// src/core/net.rs

// Blocking HTTP GET with bounded retries (reqwest)

use std::{thread, time::Duration};

use rand::Rng;
use reqwest::header::{self, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{consts, options::FetchOptions};

/// A response as far as the fetcher cares: status line and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request error: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("empty response body")]
    EmptyBody,
    #[error("gave up on {url} after {attempts} attempts: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        last: Box<FetchError>,
    },
    #[error("could not build HTTP client: {0}")]
    Client(String),
}

/// One GET, no retries. The seam the fetcher retries over.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Page, FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Page, FetchError> {
        (**self).get(url, query)
    }
}

/// reqwest blocking client with browser-like default headers.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(consts::ACCEPT_LANGUAGE),
        );
        headers.insert(header::REFERER, HeaderValue::from_static(consts::REFERER));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Page, FetchError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Page { status, body })
    }
}

/// Wraps a transport with the retry policy: 200 + non-blank body or bust.
pub struct Fetcher<T> {
    transport: T,
    opts: FetchOptions,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, opts: FetchOptions) -> Self {
        Self { transport, opts }
    }

    pub fn get(&self, url: &str) -> Result<Page, FetchError> {
        self.get_with_query(url, &[])
    }

    /// Every failure is retryable until attempts run out.
    /// Waits `delay * attempt + jitter` between attempts, never after the last one.
    pub fn get_with_query(&self, url: &str, query: &[(&str, String)]) -> Result<Page, FetchError> {
        let attempts = self.opts.attempts.max(1);
        let mut last = FetchError::EmptyBody;

        for attempt in 1..=attempts {
            match self.attempt(url, query) {
                Ok(page) => {
                    debug!(url, attempt, "fetched {} bytes", page.body.len());
                    return Ok(page);
                }
                Err(e) => {
                    warn!(url, "retry {attempt}/{attempts}: {e}");
                    last = e;
                }
            }
            if attempt < attempts {
                thread::sleep(self.backoff(attempt));
            }
        }

        Err(FetchError::Exhausted {
            url: s!(url),
            attempts,
            last: Box::new(last),
        })
    }

    fn attempt(&self, url: &str, query: &[(&str, String)]) -> Result<Page, FetchError> {
        let page = self.transport.get(url, query)?;
        if page.status != 200 {
            return Err(FetchError::Status(page.status));
        }
        if page.body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }
        Ok(page)
    }

    fn backoff(&self, attempt: u32) -> Duration {
        let max_ms = self.opts.max_jitter.as_millis() as u64;
        let jitter = if max_ms == 0 { 0 } else { rand::rng().random_range(0..=max_ms) };
        self.opts.delay * attempt + Duration::from_millis(jitter)
    }
}
