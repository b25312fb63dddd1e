//! Configuration file handling for ~/.streetfetch/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Each struct
//! here represents one `[section]` of the INI file; parsing overlays file
//! values onto `ConfigFile::default()`.

use crate::config::fetcher::DEFAULT_OUTPUT_DIR;
use crate::query::PicSize;
use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// API credentials
    pub api: ApiSettings,
    /// Artifact output directories
    pub output: OutputSettings,
    /// Picture request settings
    pub picture: PictureSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// API credentials.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Google Maps Platform API key with the Street View Static API enabled
    pub key: Option<String>,
}

/// Artifact output directories.
///
/// None of these are created automatically; fetch writes fail if they do
/// not exist.
#[derive(Debug, Clone)]
pub struct OutputSettings {
    /// Directory for picture files (`pic_<location>`)
    pub pic_dir: PathBuf,
    /// Directory for metadata documents (`meta<location>.json`)
    pub meta_dir: PathBuf,
    /// Directory for header documents (`header_<location>.json`)
    pub header_dir: PathBuf,
}

/// Picture request settings.
#[derive(Debug, Clone)]
pub struct PictureSettings {
    /// Requested picture size
    pub size: PicSize,
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Directory for log files
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
    /// Narrate fetch progress
    pub verbose: bool,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            api: ApiSettings { key: None },
            output: OutputSettings {
                pic_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
                meta_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
                header_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            },
            picture: PictureSettings {
                size: PicSize::default(),
            },
            logging: LoggingSettings {
                directory: config_directory().join("logs"),
                file: "streetfetch.log".to_string(),
                verbose: true,
            },
        }
    }
}

impl ConfigFile {
    /// Load configuration from the default path (~/.streetfetch/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = config_file_path();
        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Save configuration to the default path (~/.streetfetch/config.ini).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        let path = config_file_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists (config dir only; artifact output
        // directories are never created)
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
        }
        Ok(path)
    }
}

/// Get the path to the config directory (~/.streetfetch).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".streetfetch")
}

/// Get the path to the config file (~/.streetfetch/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [api] section
    if let Some(section) = ini.section(Some("api")) {
        if let Some(v) = section.get("key") {
            let v = v.trim();
            if !v.is_empty() {
                config.api.key = Some(v.to_string());
            }
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("pic_dir") {
            let v = v.trim();
            if !v.is_empty() {
                config.output.pic_dir = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("meta_dir") {
            let v = v.trim();
            if !v.is_empty() {
                config.output.meta_dir = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("header_dir") {
            let v = v.trim();
            if !v.is_empty() {
                config.output.header_dir = expand_tilde(v);
            }
        }
    }

    // [picture] section
    if let Some(section) = ini.section(Some("picture")) {
        if let Some(v) = section.get("size") {
            config.picture.size = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "picture".to_string(),
                key: "size".to_string(),
                value: v.to_string(),
                reason: "expected format like '640x640' or '400x300'".to_string(),
            })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
        if let Some(v) = section.get("verbose") {
            config.logging.verbose = match v.trim().to_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(ConfigFileError::InvalidValue {
                        section: "logging".to_string(),
                        key: "verbose".to_string(),
                        value: v.to_string(),
                        reason: "must be 'true' or 'false'".to_string(),
                    })
                }
            };
        }
    }

    Ok(config)
}

/// Expand a leading `~/` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Convert a `ConfigFile` to a commented INI string for saving.
fn to_config_string(config: &ConfigFile) -> String {
    let key = config.api.key.as_deref().unwrap_or("");
    let verbose = if config.logging.verbose {
        "true"
    } else {
        "false"
    };

    format!(
        r#"[api]
; Google Maps Platform API key with the Street View Static API enabled
; Get one at: https://console.cloud.google.com
key = {}

[output]
; Directories for fetched artifacts. They are never created automatically;
; make sure they exist before fetching.
; Picture bytes are written as pic_<location>
pic_dir = {}
; Metadata documents are written as meta<location>.json
meta_dir = {}
; Picture response headers are written as header_<location>.json
header_dir = {}

[picture]
; Requested picture size as WIDTHxHEIGHT (the API caps each at 640)
size = {}

[logging]
; Directory for log files
directory = {}
; Log file name
file = {}
; Narrate fetch progress (true/false)
verbose = {}
"#,
        key,
        path_to_string(&config.output.pic_dir),
        path_to_string(&config.output.meta_dir),
        path_to_string(&config.output.header_dir),
        config.picture.size,
        path_to_string(&config.logging.directory),
        config.logging.file,
        verbose,
    )
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
