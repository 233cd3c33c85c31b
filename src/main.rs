use clap::Parser;
use listing_dump::{PageScraper, ScrapeError, persist};
use std::process::ExitCode;

mod args;
use args::Args;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ScrapeError> {
    ::log::info!("Scraping {} into {}", args.url, args.output.display());

    let scraper = PageScraper::new(&args.url)?;
    let scraped = scraper.scrape_page(&scraper.fetch_page()?)?;

    persist(&scraped.payload, &args.output)?;
    println!("{}", scraped.summary(&args.output));

    Ok(())
}
