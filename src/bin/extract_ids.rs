//! Print the YouTube video ids referenced by a saved page.
//!
//! Usage: `extract-ids [path]` (defaults to `reference_site.html`).

use anyhow::Result;
use pb_site::extract::{extract_from_file, render_listing, PatternSet, DEFAULT_INPUT};
use pb_site::logging::init_tracing;
use std::env;
use std::path::PathBuf;
use tracing::{error, info};

fn main() {
    init_tracing("warn");
    if let Err(err) = run() {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let ids = extract_from_file(&path, PatternSet::Separate)?;
    info!(path = %path.display(), count = ids.len(), "Extracted video ids");
    println!("{}", render_listing(&ids));
    Ok(())
}
