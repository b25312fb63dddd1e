//! Init command - create a configuration file with default settings.

use streetfetch::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run() -> Result<(), CliError> {
    let path = config_file_path();

    if path.exists() {
        println!("Configuration file already exists: {}", path.display());
        println!("Edit it directly to change settings.");
        return Ok(());
    }

    let created = ConfigFile::ensure_exists()?;

    println!("Created configuration file: {}", created.display());
    println!();
    println!("Next steps:");
    println!("  1. Set 'key' in the [api] section to your Google API key");
    println!("  2. Run: streetfetch fetch \"<address or lat,lng>\"");

    Ok(())
}
