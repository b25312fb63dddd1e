//! Configuration types for streetfetch components.
//!
//! Two layers of configuration:
//!
//! - [`FetcherConfig`]: in-code builder holding everything one
//!   [`PanoramaFetcher`](crate::fetcher::PanoramaFetcher) needs.
//! - [`ConfigFile`]: persistent user settings in
//!   `~/.streetfetch/config.ini`, used by the CLI to fill in defaults
//!   (API key, output directories, picture size, logging).
//!
//! # Example
//!
//! ```
//! use streetfetch::config::FetcherConfig;
//! use streetfetch::query::PicSize;
//!
//! let config = FetcherConfig::new("YOUR_API_KEY", "Times Square, New York")
//!     .with_size(PicSize::new(400, 300))
//!     .with_meta_dir("./meta");
//! ```

mod fetcher;
mod file;

pub use fetcher::FetcherConfig;
pub use file::{
    config_directory, config_file_path, ApiSettings, ConfigFile, ConfigFileError,
    LoggingSettings, OutputSettings, PictureSettings,
};
