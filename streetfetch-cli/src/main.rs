//! StreetFetch CLI - Command-line interface
//!
//! This binary provides a command-line interface to the StreetFetch library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::fetch::FetchArgs;
use commands::show::ShowArgs;

#[derive(Parser)]
#[command(name = "streetfetch")]
#[command(version = streetfetch::VERSION)]
#[command(about = "Fetch Google Street View panoramas and their metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the metadata for a location and, if available, the picture
    Fetch(FetchArgs),

    /// Decode a previously fetched picture and report its dimensions
    Show(ShowArgs),

    /// View configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Create a configuration file with default settings
    Init,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch(args) => commands::fetch::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Config { command } => commands::config::run(command),
        Commands::Init => commands::init::run(),
    };

    if let Err(e) = result {
        e.exit();
    }
}
