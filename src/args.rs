use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listing-dump")]
#[command(about = "Dump the JSON model embedded in a property search results page")]
#[command(version)]
pub struct Args {
    /// Search results URL to fetch
    pub url: String,

    /// File to write the extracted JSON to (overwritten if it exists)
    pub output: PathBuf,
}
