//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::Args;
use streetfetch::config::{ConfigFile, FetcherConfig};
use streetfetch::query::{parse_size, PicSize};

use crate::error::CliError;

/// Output directory overrides shared by the fetch and show commands.
#[derive(Debug, Clone, Args)]
pub struct OutputDirArgs {
    /// Directory for picture files (default from config)
    #[arg(long, value_name = "DIR")]
    pub pic_dir: Option<PathBuf>,

    /// Directory for metadata files (default from config)
    #[arg(long, value_name = "DIR")]
    pub meta_dir: Option<PathBuf>,

    /// Directory for header files (default from config)
    #[arg(long, value_name = "DIR")]
    pub header_dir: Option<PathBuf>,
}

/// Resolve the API key from CLI args and config.
pub fn resolve_api_key(cli_key: Option<String>, config: &ConfigFile) -> Result<String, CliError> {
    // CLI takes precedence, then config
    cli_key
        .or_else(|| config.api.key.clone())
        .ok_or(CliError::MissingApiKey)
}

/// Resolve the picture size from CLI args and config.
pub fn resolve_size(cli_size: Option<String>, config: &ConfigFile) -> Result<PicSize, CliError> {
    match cli_size {
        Some(s) => parse_size(&s).map_err(|e| CliError::Config(format!("{}", e))),
        None => Ok(config.picture.size),
    }
}

/// Build a fetcher configuration from CLI args overlaid on the config file.
pub fn build_fetcher_config(
    api_key: String,
    location: String,
    cli_size: Option<String>,
    dirs: &OutputDirArgs,
    quiet: bool,
    config: &ConfigFile,
) -> Result<FetcherConfig, CliError> {
    let size = resolve_size(cli_size, config)?;

    // CLI takes precedence, then config
    let pic_dir = dirs
        .pic_dir
        .clone()
        .unwrap_or_else(|| config.output.pic_dir.clone());
    let meta_dir = dirs
        .meta_dir
        .clone()
        .unwrap_or_else(|| config.output.meta_dir.clone());
    let header_dir = dirs
        .header_dir
        .clone()
        .unwrap_or_else(|| config.output.header_dir.clone());

    Ok(FetcherConfig::new(api_key, location)
        .with_size(size)
        .with_pic_dir(pic_dir)
        .with_meta_dir(meta_dir)
        .with_header_dir(header_dir)
        .with_verbose(!quiet && config.logging.verbose))
}
