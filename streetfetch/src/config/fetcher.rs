//! Fetcher configuration.

use crate::query::PicSize;
use std::path::{Path, PathBuf};

/// Default directory for all three artifact kinds.
pub(crate) const DEFAULT_OUTPUT_DIR: &str = ".";

/// Configuration for one panorama fetcher.
///
/// Groups everything needed to construct a
/// [`PanoramaFetcher`](crate::fetcher::PanoramaFetcher): credentials, the
/// queried location, picture size, the three artifact directories, and
/// whether fetch progress should be narrated.
///
/// None of the directories are created on the caller's behalf; they must
/// exist before a fetch writes into them.
///
/// # Example
///
/// ```
/// use streetfetch::config::FetcherConfig;
/// use streetfetch::query::PicSize;
///
/// // Using defaults: 640x640, everything in ".", verbose on
/// let config = FetcherConfig::new("YOUR_API_KEY", "123 Main St, Malmö");
/// assert_eq!(config.size(), PicSize::default());
/// assert!(config.verbose());
///
/// // Custom configuration
/// let config = FetcherConfig::new("YOUR_API_KEY", "123 Main St, Malmö")
///     .with_size(PicSize::new(400, 300))
///     .with_pic_dir("./pics")
///     .with_meta_dir("./meta")
///     .with_header_dir("./headers")
///     .with_verbose(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Google Maps Platform API key
    api_key: String,
    /// Location to query, passed to the API verbatim
    location: String,
    /// Requested picture dimensions
    size: PicSize,
    /// Directory for picture files
    pic_dir: PathBuf,
    /// Directory for metadata documents
    meta_dir: PathBuf,
    /// Directory for header documents
    header_dir: PathBuf,
    /// Narrate fetch progress through the logger
    verbose: bool,
}

impl FetcherConfig {
    /// Create a configuration for a location with default settings.
    pub fn new(api_key: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            location: location.into(),
            size: PicSize::default(),
            pic_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            meta_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            header_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            verbose: true,
        }
    }

    /// Set the requested picture size. Default: `640x640`.
    pub fn with_size(mut self, size: PicSize) -> Self {
        self.size = size;
        self
    }

    /// Set the directory picture files are written into. Default: `.`
    pub fn with_pic_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.pic_dir = dir.into();
        self
    }

    /// Set the directory metadata documents are written into. Default: `.`
    pub fn with_meta_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.meta_dir = dir.into();
        self
    }

    /// Set the directory header documents are written into. Default: `.`
    pub fn with_header_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.header_dir = dir.into();
        self
    }

    /// Enable or disable fetch narration. Default: enabled.
    ///
    /// Disabling narration only silences progress messages; failures still
    /// reach the caller as errors.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the queried location.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Get the requested picture size.
    pub fn size(&self) -> PicSize {
        self.size
    }

    /// Get the picture directory.
    pub fn pic_dir(&self) -> &Path {
        &self.pic_dir
    }

    /// Get the metadata directory.
    pub fn meta_dir(&self) -> &Path {
        &self.meta_dir
    }

    /// Get the header directory.
    pub fn header_dir(&self) -> &Path {
        &self.header_dir
    }

    /// Whether fetch progress is narrated.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = FetcherConfig::new("key", "Oslo");

        assert_eq!(config.api_key(), "key");
        assert_eq!(config.location(), "Oslo");
        assert_eq!(config.size(), PicSize::default());
        assert_eq!(config.pic_dir(), Path::new(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.meta_dir(), Path::new(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.header_dir(), Path::new(DEFAULT_OUTPUT_DIR));
        assert!(config.verbose());
    }

    #[test]
    fn test_with_size() {
        let config = FetcherConfig::new("key", "Oslo").with_size(PicSize::new(400, 300));

        assert_eq!(config.size(), PicSize::new(400, 300));
        assert_eq!(config.pic_dir(), Path::new(DEFAULT_OUTPUT_DIR)); // Unchanged
    }

    #[test]
    fn test_with_directories() {
        let config = FetcherConfig::new("key", "Oslo")
            .with_pic_dir("/data/pics")
            .with_meta_dir("/data/meta")
            .with_header_dir("/data/headers");

        assert_eq!(config.pic_dir(), Path::new("/data/pics"));
        assert_eq!(config.meta_dir(), Path::new("/data/meta"));
        assert_eq!(config.header_dir(), Path::new("/data/headers"));
    }

    #[test]
    fn test_with_verbose() {
        let config = FetcherConfig::new("key", "Oslo").with_verbose(false);

        assert!(!config.verbose());
    }

    #[test]
    fn test_builder_chain() {
        let config = FetcherConfig::new("key", "59.91,10.75")
            .with_size(PicSize::new(200, 100))
            .with_pic_dir("./p")
            .with_meta_dir("./m")
            .with_header_dir("./h")
            .with_verbose(false);

        assert_eq!(config.location(), "59.91,10.75");
        assert_eq!(config.size().to_string(), "200x100");
        assert_eq!(config.pic_dir(), Path::new("./p"));
        assert_eq!(config.meta_dir(), Path::new("./m"));
        assert_eq!(config.header_dir(), Path::new("./h"));
        assert!(!config.verbose());
    }

    #[test]
    fn test_equality() {
        let config1 = FetcherConfig::new("key", "Oslo");
        let config2 = FetcherConfig::new("key", "Oslo");
        let config3 = FetcherConfig::new("key", "Bergen");

        assert_eq!(config1, config2);
        assert_ne!(config1, config3);
    }
}
