//! linkopener CLI - open the links stored in a spreadsheet cell range

mod error;
mod fetch;
mod logging;
mod opener;
mod run;
mod source;

use anyhow::{Context, Result};
use clap::Parser;

use crate::fetch::HttpFetcher;
use crate::opener::BrowserOpener;

/// Spreadsheet used when `--filename` is not given
const DEFAULT_FILENAME: &str =
    "https://www.dropbox.com/s/qv6qi3oejylsvrm/%C3%9Cbersicht%20Module.xlsx?dl=1";

/// Cell range used when `--cellrange` is not given
const DEFAULT_CELLRANGE: &str = "L2:L20";

#[derive(Parser, Debug)]
#[command(name = "linkopener")]
#[command(
    author,
    version,
    about = "Open every http(s) link found in a cell range of an xlsx file"
)]
struct Cli {
    /// Local xlsx file, or an http(s) URL to download it from
    #[arg(long, default_value = DEFAULT_FILENAME)]
    filename: String,

    /// Cell range to scan, e.g. B2:C10 (upper-case columns)
    #[arg(long, default_value = DEFAULT_CELLRANGE)]
    cellrange: String,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let fetcher = HttpFetcher::new().context("Failed to set up HTTP client")?;
    let summary = run::run(&cli.filename, &cli.cellrange, &fetcher, &BrowserOpener)?;

    log::info!(
        "Done: {} cell(s) read, {} skipped, {} of {} link(s) opened",
        summary.cells_read,
        summary.cells_skipped,
        summary.links_opened,
        summary.links_found
    );
    if summary.open_failures > 0 {
        log::warn!("{} link(s) could not be opened", summary.open_failures);
    }
    Ok(())
}
