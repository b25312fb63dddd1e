//! Panorama fetch facade.
//!
//! [`PanoramaFetcher`] wires the provider and the artifact store together
//! and enforces the one rule that matters for billing: the picture
//! endpoint is only ever called after a metadata lookup reported `OK`.
//! Metadata lookups are free; pictures are not.
//!
//! The expected call sequence for one location:
//!
//! 1. [`fetch_metadata`](PanoramaFetcher::fetch_metadata) - queries the
//!    free endpoint, persists the document, records the status.
//! 2. [`fetch_picture`](PanoramaFetcher::fetch_picture) - if and only if
//!    the recorded status is `OK`, downloads the picture and persists the
//!    bytes and the response headers.
//! 3. [`show_picture`](PanoramaFetcher::show_picture) - optionally decode
//!    the saved picture and report its dimensions.
//!
//! Every write is an unconditional overwrite, so re-running a fetch for
//! the same location replaces the artifacts in place.

use crate::config::FetcherConfig;
use crate::http::HttpClient;
use crate::log::{Logger, NoOpLogger, TracingLogger};
use crate::metadata::{PanoramaMetadata, PanoramaStatus};
use crate::provider::{ProviderError, StreetViewProvider};
use crate::query::ViewQuery;
use crate::store::{ArtifactStore, StoreError};
use crate::{log_info, log_warn};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors from fetcher operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API could not be queried or answered badly
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An artifact could not be written
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A gated operation was called before any metadata was recorded
    #[error("Metadata has not been fetched yet; call fetch_metadata first")]
    MetadataNotFetched,

    /// A previously saved metadata document could not be read back
    #[error("Failed to load saved metadata: {0}")]
    MetadataLoad(String),

    /// The saved picture could not be read or decoded
    #[error("Failed to load picture: {0}")]
    PictureLoad(String),
}

/// Outcome of a gated picture fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum PictureOutcome {
    /// The gate was open; picture and headers are on disk
    Saved {
        picture_path: PathBuf,
        header_path: PathBuf,
    },
    /// The recorded status forbids the billable request; nothing was
    /// downloaded and nothing was written
    NotAvailable { status: PanoramaStatus },
}

/// Outcome of loading a previously saved picture.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowOutcome {
    /// The saved picture decoded successfully
    Loaded {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// The recorded status means no picture was ever saved
    NotAvailable { status: PanoramaStatus },
}

/// High-level facade for fetching one location's panorama artifacts.
///
/// Holds the query, the provider, the artifact store, and the last
/// recorded metadata (the gate state).
///
/// # Example
///
/// ```no_run
/// use streetfetch::config::FetcherConfig;
/// use streetfetch::fetcher::{PanoramaFetcher, PictureOutcome};
/// use streetfetch::http::ReqwestClient;
///
/// let config = FetcherConfig::new("YOUR_API_KEY", "123 Main St, Malmö")
///     .with_pic_dir("./pics")
///     .with_meta_dir("./meta")
///     .with_header_dir("./headers");
/// let client = ReqwestClient::new().unwrap();
/// let mut fetcher = PanoramaFetcher::new(config, client);
///
/// fetcher.fetch_metadata().unwrap();
/// match fetcher.fetch_picture().unwrap() {
///     PictureOutcome::Saved { picture_path, .. } => {
///         println!("saved {}", picture_path.display())
///     }
///     PictureOutcome::NotAvailable { status } => {
///         println!("no imagery: {}", status)
///     }
/// }
/// ```
pub struct PanoramaFetcher<C: HttpClient> {
    /// The location and size being fetched
    query: ViewQuery,
    /// Street View Static API client
    provider: StreetViewProvider<C>,
    /// Artifact persistence
    store: ArtifactStore,
    /// Fetch narration
    logger: Arc<dyn Logger>,
    /// Gate state: the last recorded metadata, if any
    metadata: Option<PanoramaMetadata>,
}

impl<C: HttpClient> PanoramaFetcher<C> {
    /// Create a fetcher from configuration.
    ///
    /// The `verbose` flag selects the logger: [`TracingLogger`] when set,
    /// [`NoOpLogger`] otherwise.
    pub fn new(config: FetcherConfig, http_client: C) -> Self {
        let logger: Arc<dyn Logger> = if config.verbose() {
            Arc::new(TracingLogger)
        } else {
            Arc::new(NoOpLogger)
        };
        Self::with_logger(config, http_client, logger)
    }

    /// Create a fetcher with an explicit logger, ignoring `verbose`.
    pub fn with_logger(
        config: FetcherConfig,
        http_client: C,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let query = ViewQuery::new(config.location(), config.size());
        let provider = StreetViewProvider::new(http_client, config.api_key());
        let store = ArtifactStore::new(config.pic_dir(), config.meta_dir(), config.header_dir());

        Self {
            query,
            provider,
            store,
            logger,
            metadata: None,
        }
    }

    /// The query this fetcher serves.
    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// The last recorded metadata, if any fetch or restore succeeded.
    pub fn metadata(&self) -> Option<&PanoramaMetadata> {
        self.metadata.as_ref()
    }

    /// Query the metadata endpoint and persist the document.
    ///
    /// The document is saved whatever its status says; a `ZERO_RESULTS`
    /// answer is still an answer worth keeping. The status is recorded as
    /// the gate state for [`fetch_picture`](Self::fetch_picture).
    ///
    /// # Errors
    ///
    /// Transport or HTTP failures, unparseable responses, and failed
    /// writes. On error no document is persisted and the gate state is
    /// left unchanged.
    pub fn fetch_metadata(&mut self) -> Result<&PanoramaMetadata, FetchError> {
        log_info!(self.logger, "Fetching metadata for {}", self.query.location);

        let metadata = self.provider.fetch_metadata(&self.query)?;
        let path = self.store.save_metadata(&self.query, &metadata)?;

        log_info!(
            self.logger,
            "Obtained metadata for {} (status {}), saved to {}",
            self.query.location,
            metadata.status,
            path.display()
        );

        Ok(self.metadata.insert(metadata))
    }

    /// Restore the gate state from a previously saved metadata document.
    ///
    /// Lets a fresh fetcher consult an earlier run's recorded status
    /// without touching the network, e.g. to show an already downloaded
    /// picture.
    pub fn load_saved_metadata(&mut self) -> Result<&PanoramaMetadata, FetchError> {
        let path = self.store.meta_path(&self.query);
        let bytes = fs::read(&path)
            .map_err(|e| FetchError::MetadataLoad(format!("{}: {}", path.display(), e)))?;
        let metadata: PanoramaMetadata = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::MetadataLoad(format!("{}: {}", path.display(), e)))?;

        log_info!(
            self.logger,
            "Restored metadata for {} from {} (status {})",
            self.query.location,
            path.display(),
            metadata.status
        );

        Ok(self.metadata.insert(metadata))
    }

    /// Download and persist the picture, if the gate allows it.
    ///
    /// With an `OK` status recorded, requests the picture endpoint, then
    /// writes the picture bytes and the response headers (two files).
    /// With any other status, returns
    /// [`PictureOutcome::NotAvailable`] without making a single request;
    /// this is what keeps a `ZERO_RESULTS` lookup free of charge.
    ///
    /// # Errors
    ///
    /// [`FetchError::MetadataNotFetched`] when no metadata was recorded
    /// yet; otherwise transport, HTTP, and write failures. A failure
    /// after the gate check writes no partial artifacts: the picture file
    /// is only written from a successful response, and the header file
    /// only after the picture file.
    pub fn fetch_picture(&self) -> Result<PictureOutcome, FetchError> {
        let metadata = self.metadata.as_ref().ok_or(FetchError::MetadataNotFetched)?;

        if !metadata.is_ok() {
            let status = metadata.status.clone();
            log_warn!(
                self.logger,
                "Picture not available for {} (status {}), skipping download",
                self.query.location,
                status
            );
            return Ok(PictureOutcome::NotAvailable { status });
        }

        log_info!(self.logger, "Fetching picture for {}", self.query.location);

        let picture = self.provider.fetch_picture(&self.query)?;
        let picture_path = self.store.save_picture(&self.query, &picture.bytes)?;
        let header_path = self.store.save_headers(&self.query, &picture.headers)?;

        log_info!(
            self.logger,
            "Saved picture to {} and headers to {}",
            picture_path.display(),
            header_path.display()
        );

        Ok(PictureOutcome::Saved {
            picture_path,
            header_path,
        })
    }

    /// Decode the previously saved picture and report its dimensions.
    ///
    /// Follows the same gate as [`fetch_picture`](Self::fetch_picture):
    /// with a non-`OK` status there is nothing on disk to show. The
    /// format is sniffed from the file contents since picture files carry
    /// no extension.
    pub fn show_picture(&self) -> Result<ShowOutcome, FetchError> {
        let metadata = self.metadata.as_ref().ok_or(FetchError::MetadataNotFetched)?;

        if !metadata.is_ok() {
            let status = metadata.status.clone();
            log_warn!(
                self.logger,
                "No picture to show for {} (status {})",
                self.query.location,
                status
            );
            return Ok(ShowOutcome::NotAvailable { status });
        }

        let path = self.store.picture_path(&self.query);
        let image = image::ImageReader::open(&path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| FetchError::PictureLoad(format!("{}: {}", path.display(), e)))?
            .decode()
            .map_err(|e| FetchError::PictureLoad(format!("{}: {}", path.display(), e)))?;

        let (width, height) = (image.width(), image.height());
        log_info!(
            self.logger,
            "Loaded picture {} ({}x{})",
            path.display(),
            width,
            height
        );

        Ok(ShowOutcome::Loaded {
            path,
            width,
            height,
        })
    }
}
