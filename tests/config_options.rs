// tests/config_options.rs
//
// Env → AppOptions, then validation.
//
use std::collections::HashMap;
use std::time::Duration;

use bms_scrape::config::{AppOptions, ConfigError};

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn defaults_match_the_listing_site() {
    let opts = AppOptions::from_vars(vars(&[])).unwrap().validate().unwrap();
    assert_eq!(opts.fetch.attempts, 3);
    assert_eq!(opts.fetch.timeout, Duration::from_secs(12));
    assert_eq!(opts.page.default_actor_image, "/user.png");
    assert_eq!(opts.page.default_poster, "/default-poster.png");
    assert!(!opts.search.use_images);
    assert!(!opts.search.enabled());
    assert_eq!(
        opts.page.listing_url("stree-2/ET00364249"),
        "https://in.bookmyshow.com/movies/bengaluru/stree-2/ET00364249"
    );
}

#[test]
fn env_overrides_apply() {
    let opts = AppOptions::from_vars(vars(&[
        ("GOOGLE_API_KEY", "k"),
        ("GOOGLE_CX", "cx"),
        ("BMS_USE_GOOGLE_IMAGES", "yes"),
        ("BMS_DEFAULT_ACTOR_IMAGE", "/img/actor.png"),
        ("BMS_BASE_URL", "http://localhost:8080/"),
        ("BMS_CITY", "pune"),
        ("BMS_RETRIES", "5"),
        ("BMS_RETRY_DELAY_MS", "0"),
    ]))
    .unwrap()
    .validate()
    .unwrap();

    assert!(opts.search.enabled());
    assert!(opts.search.use_images);
    assert_eq!(opts.page.default_actor_image, "/img/actor.png");
    assert_eq!(opts.fetch.attempts, 5);
    assert_eq!(opts.fetch.delay, Duration::ZERO);
    assert_eq!(opts.page.listing_url("x"), "http://localhost:8080/movies/pune/x");
}

#[test]
fn search_needs_both_credentials() {
    let opts = AppOptions::from_vars(vars(&[("GOOGLE_API_KEY", "k")])).unwrap();
    assert!(!opts.search.enabled());
    let opts = AppOptions::from_vars(vars(&[("GOOGLE_API_KEY", "k"), ("GOOGLE_CX", "  ")])).unwrap();
    assert!(!opts.search.enabled());
}

#[test]
fn bad_values_are_rejected() {
    assert!(matches!(
        AppOptions::from_vars(vars(&[("BMS_USE_GOOGLE_IMAGES", "maybe")])),
        Err(ConfigError::Bool { .. })
    ));
    assert!(matches!(
        AppOptions::from_vars(vars(&[("BMS_RETRIES", "-1")])),
        Err(ConfigError::Number { .. })
    ));
    assert_eq!(
        AppOptions::from_vars(vars(&[("BMS_RETRIES", "0")])).unwrap().validate(),
        Err(ConfigError::Zero("BMS_RETRIES"))
    );
    assert_eq!(
        AppOptions::from_vars(vars(&[("BMS_DEFAULT_ACTOR_IMAGE", " ")])).unwrap().validate(),
        Err(ConfigError::Blank("BMS_DEFAULT_ACTOR_IMAGE"))
    );
}
