//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use streetfetch::config::ConfigFileError;
use streetfetch::fetcher::FetchError;
use streetfetch::http::HttpError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// No API key on the command line or in the config file
    MissingApiKey,
    /// Failed to create the HTTP client
    HttpClient(HttpError),
    /// A fetch operation failed
    Fetch(FetchError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::MissingApiKey => {
                eprintln!();
                eprintln!("Pass a key with --key, or store one permanently:");
                eprintln!("  1. Run: streetfetch init");
                eprintln!("  2. Set 'key' in the [api] section of the config file");
            }
            CliError::Fetch(FetchError::Provider(_)) => {
                eprintln!();
                eprintln!("Make sure:");
                eprintln!("  1. Street View Static API is enabled in Google Cloud Console");
                eprintln!("  2. Billing is enabled for your project");
                eprintln!("  3. Your API key is valid and unrestricted");
            }
            CliError::Fetch(FetchError::Store(_)) => {
                eprintln!();
                eprintln!("Output directories are not created automatically.");
                eprintln!("Make sure the pic, meta, and header directories exist.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::MissingApiKey => write!(f, "No API key configured"),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Fetch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::HttpClient(e) => Some(e),
            CliError::Fetch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Fetch(e)
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}
