// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod log;
pub mod scrape;
pub mod specs;

pub use data::{CastMember, MovieRecord, ResultEnvelope};
