// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://in.bookmyshow.com";
pub const MOVIES_PREFIX: &str = "/movies/";
pub const DEFAULT_CITY: &str = "bengaluru";
pub const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/120.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REFERER: &str = "https://www.google.com/";

// Retry
pub const RETRIES: u32 = 3;
pub const RETRY_DELAY_MS: u64 = 1_000;
pub const JITTER_MS: u64 = 500; // extra 0..=500 ms
pub const TIMEOUT_SECS: u64 = 12;

// Sentinels
pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_ACTOR_IMAGE: &str = "/user.png";
pub const DEFAULT_POSTER: &str = "/default-poster.png";
pub const FETCH_FAILED: &str = "Failed to fetch BMS page";

// Search
pub const RELEASE_DATE_QUERY_SUFFIX: &str = "release date India";
pub const RELEASE_DATE_RESULTS: u32 = 3;
pub const ACTOR_QUERY_SUFFIX: &str = "actor";

// Page layout (versioned class names; drift shows up as sentinel values)
pub const SEL_TITLE: &str = "h1";
pub const SEL_RATING: &str = "h5.sc-ycjzp1-4";
pub const SEL_FORMAT_LANGUAGE: &str = "a.sc-2k6tnd-2.eUdyhJ";
pub const SEL_CAST_BLOCK: &str = "a.sc-17p4id8-0.chrvLp";
pub const SEL_CAST_HEADING: &str = "h5";
pub const SEL_CAST_IMAGE: &str = "img";
pub const SEL_POSTER: &str = "img[src*='/movies/images/mobile/thumbnail/']";
pub const SEL_COVER: &str = "img[src*='/movies/images/cover/']";
pub const SEL_INLINE_BACKGROUND: &str = "[style*='background-image']";
