// src/main.rs

use anyhow::Result;
use clap::Parser;
use imgloader::logging;
use imgloader::prelude::*;
use std::path::PathBuf;

/// Download the images listed in a text file, one URL per line.
#[derive(Debug, Parser)]
#[command(name = "imgloader", version)]
struct Cli {
    /// Plain text file containing image URLs.
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Wrong arity prints usage and exits with status 2.
    let cli = Cli::parse();

    logging::init_logging()?;

    let fetcher = BatchImageFetcher::new(FetcherConfig::default())?;
    fetcher.download_by_text_file(&cli.input).await;

    Ok(())
}
