//! Configuration management CLI commands.
//!
//! Provides `config list` and `config path` commands for viewing
//! configuration settings from the command line.

use clap::Subcommand;
use streetfetch::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
    }
}

/// List all configuration settings.
fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();

    println!("Configuration Settings");
    println!("======================");
    println!();
    println!("[api]");
    match &config.api.key {
        Some(key) => println!("  key = {}", key),
        None => println!("  key = (not set)"),
    }
    println!();
    println!("[output]");
    println!("  pic_dir = {}", config.output.pic_dir.display());
    println!("  meta_dir = {}", config.output.meta_dir.display());
    println!("  header_dir = {}", config.output.header_dir.display());
    println!();
    println!("[picture]");
    println!("  size = {}", config.picture.size);
    println!();
    println!("[logging]");
    println!("  directory = {}", config.logging.directory.display());
    println!("  file = {}", config.logging.file);
    println!("  verbose = {}", config.logging.verbose);

    Ok(())
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}
