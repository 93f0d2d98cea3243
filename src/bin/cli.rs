// src/bin/cli.rs
use std::process::ExitCode;

use bms_scrape::cli;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let code = cli::run(std::env::args().skip(1), &mut std::io::stdout().lock())?;
    Ok(code)
}
