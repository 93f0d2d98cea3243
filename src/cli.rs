// src/cli.rs
use std::io::{self, Write};
use std::process::ExitCode;

use thiserror::Error;

use crate::config::{AppOptions, ConfigError};
use crate::data::ResultEnvelope;

const USAGE: &str = "\
Usage: bms_scrape [options] <slug>

Fetch one BookMyShow movie listing and print it as JSON on stdout.

Options:
  --city <name>       City segment of the listing URL (env BMS_CITY)
  --google-images     Look up actor images for cast without one (env BMS_USE_GOOGLE_IMAGES)
  -v, --verbose       More diagnostics on stderr (repeat for debug)
  -h, --help          Show this help

Environment:
  GOOGLE_API_KEY, GOOGLE_CX   Search API credentials; enrichment is skipped without them
  BMS_LOG                     Log filter directive, overrides -v";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("No slug provided")]
    NoSlug,
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("Unknown arg: {0}")]
    UnknownArg(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub slug: Option<String>,
    pub city: Option<String>,
    pub google_images: bool,
    pub verbose: u8,
    pub help: bool,
    /// Positionals after the slug; reported, otherwise ignored.
    pub ignored: Vec<String>,
}

pub fn parse_args<I>(argv: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args::default();
    let mut it = argv.into_iter();

    while let Some(a) = it.next() {
        match a.as_str() {
            "--city" => args.city = Some(it.next().ok_or(CliError::MissingValue("--city"))?),
            "--google-images" => args.google_images = true,
            "-v" | "--verbose" => args.verbose = args.verbose.saturating_add(1),
            "-vv" => args.verbose = args.verbose.saturating_add(2),
            "-h" | "--help" => args.help = true,
            _ if a.starts_with('-') && a.len() > 1 => return Err(CliError::UnknownArg(a)),
            _ if args.slug.is_none() => args.slug = Some(a),
            _ => args.ignored.push(a),
        }
    }
    Ok(args)
}

fn slug(args: &Args) -> Result<&str, CliError> {
    args.slug
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(CliError::NoSlug)
}

/// Merge flags over the env-derived options and validate once.
pub fn resolve(args: &Args, mut opts: AppOptions) -> Result<(String, AppOptions), CliError> {
    let slug = slug(args)?;

    if let Some(city) = &args.city {
        opts.page.city = city.clone();
    }
    if args.google_images {
        opts.search.use_images = true;
    }
    Ok((s!(slug), opts.validate()?))
}

/// Whole program minus process setup. Exactly one JSON document goes to `out`
/// unless help was asked for.
///
/// Exit status is non-zero only when no slug was given. Every other problem,
/// a bad flag or bad config included, still exits 0 with `"success": false`.
pub fn run<I, W>(argv: I, out: &mut W) -> io::Result<ExitCode>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let parsed = parse_args(argv);
    crate::log::init(parsed.as_ref().map_or(0, |a| a.verbose));

    let args = match parsed {
        Ok(args) => args,
        Err(e) => return fail(out, e),
    };
    if args.help {
        eprintln!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }
    for extra in &args.ignored {
        tracing::warn!("ignoring extra argument {extra:?}");
    }

    let job = slug(&args)
        .and_then(|_| AppOptions::from_env().map_err(CliError::from))
        .and_then(|env| resolve(&args, env));
    let (slug, opts) = match job {
        Ok(job) => job,
        Err(e) => return fail(out, e),
    };

    let envelope = crate::scrape::run(&slug, &opts);
    emit(out, &envelope)?;
    Ok(ExitCode::SUCCESS)
}

fn fail<W: Write>(out: &mut W, e: CliError) -> io::Result<ExitCode> {
    tracing::error!("{e}");
    emit(out, &ResultEnvelope::failure(e.to_string()))?;
    Ok(match e {
        CliError::NoSlug => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn emit<W: Write>(out: &mut W, envelope: &ResultEnvelope) -> io::Result<()> {
    let json = envelope.to_json_pretty().map_err(io::Error::other)?;
    writeln!(out, "{json}")?;
    out.flush()
}
