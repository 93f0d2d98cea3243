// src/config/options.rs
use std::{str::FromStr, time::Duration};

use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: expected a boolean, got {value:?}")]
    Bool { key: &'static str, value: String },
    #[error("{key}: expected a non-negative integer, got {value:?}")]
    Number { key: &'static str, value: String },
    #[error("{0} must be at least 1")]
    Zero(&'static str),
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub page: PageOptions,
    pub fetch: FetchOptions,
    pub search: SearchOptions,
}

/// Where the listing lives and what to put in its place when it's missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    pub base_url: String,
    pub city: String,
    pub default_actor_image: String,
    pub default_poster: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            city: s!(DEFAULT_CITY),
            default_actor_image: s!(DEFAULT_ACTOR_IMAGE),
            default_poster: s!(DEFAULT_POSTER),
        }
    }
}

impl PageOptions {
    pub fn listing_url(&self, slug: &str) -> String {
        join!(self.base_url.trim_end_matches('/'), MOVIES_PREFIX, &self.city, "/", slug)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub attempts: u32,
    pub delay: Duration,
    pub max_jitter: Duration,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            attempts: RETRIES,
            delay: Duration::from_millis(RETRY_DELAY_MS),
            max_jitter: Duration::from_millis(JITTER_MS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub api_key: String,
    pub cx: String,
    pub use_images: bool,
}

impl SearchOptions {
    /// Both credentials present. Without them no search request is made.
    pub fn enabled(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.cx.trim().is_empty()
    }
}

impl AppOptions {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build options from a variable lookup. Unset keys keep their defaults.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(v) = var("GOOGLE_API_KEY") {
            opts.search.api_key = v;
        }
        if let Some(v) = var("GOOGLE_CX") {
            opts.search.cx = v;
        }
        if let Some(v) = var("BMS_USE_GOOGLE_IMAGES") {
            opts.search.use_images = parse_bool("BMS_USE_GOOGLE_IMAGES", &v)?;
        }
        if let Some(v) = var("BMS_DEFAULT_ACTOR_IMAGE") {
            opts.page.default_actor_image = v;
        }
        if let Some(v) = var("BMS_DEFAULT_POSTER") {
            opts.page.default_poster = v;
        }
        if let Some(v) = var("BMS_BASE_URL") {
            opts.page.base_url = v;
        }
        if let Some(v) = var("BMS_CITY") {
            opts.page.city = v;
        }
        if let Some(v) = var("BMS_RETRIES") {
            opts.fetch.attempts = parse_num("BMS_RETRIES", &v)?;
        }
        if let Some(v) = var("BMS_RETRY_DELAY_MS") {
            opts.fetch.delay = Duration::from_millis(parse_num("BMS_RETRY_DELAY_MS", &v)?);
        }
        if let Some(v) = var("BMS_TIMEOUT_SECS") {
            opts.fetch.timeout = Duration::from_secs(parse_num("BMS_TIMEOUT_SECS", &v)?);
        }

        Ok(opts)
    }

    /// Checked once at startup, after env and flags are merged.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.fetch.attempts == 0 {
            return Err(ConfigError::Zero("BMS_RETRIES"));
        }
        if self.fetch.timeout.is_zero() {
            return Err(ConfigError::Zero("BMS_TIMEOUT_SECS"));
        }
        if self.page.default_actor_image.trim().is_empty() {
            return Err(ConfigError::Blank("BMS_DEFAULT_ACTOR_IMAGE"));
        }
        if self.page.default_poster.trim().is_empty() {
            return Err(ConfigError::Blank("BMS_DEFAULT_POSTER"));
        }
        if self.page.base_url.trim().is_empty() {
            return Err(ConfigError::Blank("BMS_BASE_URL"));
        }
        if self.page.city.trim().is_empty() {
            return Err(ConfigError::Blank("BMS_CITY"));
        }
        Ok(self)
    }
}

pub fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Bool { key, value: s!(value) }),
    }
}

fn parse_num<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Number { key, value: s!(value) })
}
