//! Show command - inspect a previously fetched picture.

use clap::Args;
use streetfetch::fetcher::{PanoramaFetcher, ShowOutcome};
use streetfetch::http::ReqwestClient;

use super::common::{build_fetcher_config, OutputDirArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the show command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Location whose saved picture to inspect
    pub location: String,

    #[command(flatten)]
    pub dirs: OutputDirArgs,
}

/// Run the show command.
///
/// Restores the recorded metadata status from disk, then decodes the saved
/// picture. Never contacts the API, so no key is required.
pub fn run(args: ShowArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("show");
    let config = runner.config();

    // The show path is offline; an absent key is fine here
    let api_key = config.api.key.clone().unwrap_or_default();
    let fetcher_config = build_fetcher_config(
        api_key,
        args.location.clone(),
        None,
        &args.dirs,
        false,
        config,
    )?;

    let http_client = ReqwestClient::new().map_err(CliError::HttpClient)?;
    let mut fetcher = PanoramaFetcher::new(fetcher_config, http_client);

    fetcher.load_saved_metadata()?;

    match fetcher.show_picture()? {
        ShowOutcome::Loaded {
            path,
            width,
            height,
        } => {
            println!("{}", path.display());
            println!("  Dimensions: {}x{}", width, height);
        }
        ShowOutcome::NotAvailable { status } => {
            println!(
                "No picture was saved for this location (status {})",
                status
            );
        }
    }

    Ok(())
}
