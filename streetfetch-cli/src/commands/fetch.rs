//! Fetch command - gated metadata and picture download for one location.

use clap::Args;
use streetfetch::fetcher::{PanoramaFetcher, PictureOutcome};
use streetfetch::http::ReqwestClient;

use super::common::{build_fetcher_config, resolve_api_key, OutputDirArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Location to fetch, an address or a "lat,lng" pair
    pub location: String,

    /// Google API key (default from config)
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// Picture size as WIDTHxHEIGHT, capped at 640x640
    #[arg(long, value_name = "WxH")]
    pub size: Option<String>,

    #[command(flatten)]
    pub dirs: OutputDirArgs,

    /// Suppress fetch narration in the log
    #[arg(long)]
    pub quiet: bool,
}

/// Run the fetch command.
pub fn run(args: FetchArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("fetch");
    let config = runner.config();

    let api_key = resolve_api_key(args.key, config)?;
    let fetcher_config = build_fetcher_config(
        api_key,
        args.location.clone(),
        args.size,
        &args.dirs,
        args.quiet,
        config,
    )?;

    let http_client = ReqwestClient::new().map_err(CliError::HttpClient)?;
    let mut fetcher = PanoramaFetcher::new(fetcher_config, http_client);

    println!("Fetching Street View metadata for: {}", args.location);
    let metadata = fetcher.fetch_metadata()?;
    println!("  Status: {}", metadata.status);

    match fetcher.fetch_picture()? {
        PictureOutcome::Saved {
            picture_path,
            header_path,
        } => {
            println!("✓ Picture saved: {}", picture_path.display());
            println!("  Headers saved: {}", header_path.display());
        }
        PictureOutcome::NotAvailable { status } => {
            println!("No picture available for this location (status {})", status);
        }
    }

    Ok(())
}
