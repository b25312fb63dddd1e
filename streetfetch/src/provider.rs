//! Google Street View Static API provider.
//!
//! Talks to the two endpoints of the Street View Static API:
//!
//! - Metadata: `https://maps.googleapis.com/maps/api/streetview/metadata`
//!   (free to query; reports whether imagery exists for a location)
//! - Picture: `https://maps.googleapis.com/maps/api/streetview`
//!   (billable; serves the panorama image itself)
//!
//! Requests carry the API key and the *verbatim* location string as query
//! parameters; percent-encoding is the HTTP layer's job. The provider does
//! not look at the metadata status. Gating the billable picture endpoint
//! behind an `OK` status is [`crate::fetcher::PanoramaFetcher`]'s job.

use crate::http::{HttpClient, HttpError};
use crate::metadata::PanoramaMetadata;
use crate::query::ViewQuery;
use std::collections::BTreeMap;
use thiserror::Error;

/// Metadata endpoint of the Street View Static API.
pub const METADATA_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/streetview/metadata";

/// Picture endpoint of the Street View Static API.
pub const PICTURE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/streetview";

/// Errors from the Street View Static API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    /// The server could not be reached
    #[error("HTTP transport error: {0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-success status code
    #[error("HTTP {status} from the {endpoint} endpoint")]
    HttpStatus {
        endpoint: &'static str,
        status: u16,
    },

    /// The metadata document could not be parsed
    #[error("Invalid metadata response: {0}")]
    InvalidResponse(String),
}

/// A fetched panorama picture and the response headers that came with it.
///
/// The headers (content type, length, caching fields) are an artifact of
/// their own and are persisted next to the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct PictureResponse {
    /// Raw image bytes as served
    pub bytes: Vec<u8>,
    /// Response headers of the picture request
    pub headers: BTreeMap<String, String>,
}

/// Street View Static API provider.
///
/// Requires a Google Maps Platform API key with the Street View Static API
/// enabled. Users must:
/// 1. Create a Google Cloud Platform project
/// 2. Enable the Street View Static API
/// 3. Enable billing for the project
/// 4. Create an API key and provide it to this provider
///
/// Metadata requests are free of charge; picture requests are billed.
///
/// # Example
///
/// ```no_run
/// use streetfetch::http::ReqwestClient;
/// use streetfetch::provider::StreetViewProvider;
/// use streetfetch::query::{PicSize, ViewQuery};
///
/// let client = ReqwestClient::new().unwrap();
/// let provider = StreetViewProvider::new(client, "YOUR_API_KEY");
/// let query = ViewQuery::new("Times Square, New York", PicSize::default());
/// let metadata = provider.fetch_metadata(&query).unwrap();
/// println!("status: {}", metadata.status);
/// ```
pub struct StreetViewProvider<C: HttpClient> {
    http_client: C,
    api_key: String,
}

impl<C: HttpClient> StreetViewProvider<C> {
    /// Creates a new provider with the given API key.
    pub fn new(http_client: C, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
        }
    }

    /// Queries the metadata endpoint for the location.
    ///
    /// Sends `key` and the unmodified `location` as query parameters. The
    /// returned document carries the status (which controls the picture
    /// gate) plus every other provider field verbatim.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success HTTP statuses, and unparseable
    /// response bodies.
    pub fn fetch_metadata(&self, query: &ViewQuery) -> Result<PanoramaMetadata, ProviderError> {
        let response = self.http_client.get(
            METADATA_ENDPOINT,
            &[
                ("key", self.api_key.as_str()),
                ("location", query.location.as_str()),
            ],
        )?;

        if !response.is_success() {
            return Err(ProviderError::HttpStatus {
                endpoint: "metadata",
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    /// Downloads the panorama picture for the location.
    ///
    /// Sends `key`, the unmodified `location`, and `size` as query
    /// parameters. This request is billed; callers are expected to check
    /// the metadata status first.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success HTTP statuses.
    pub fn fetch_picture(&self, query: &ViewQuery) -> Result<PictureResponse, ProviderError> {
        let size = query.size.to_string();
        let response = self.http_client.get(
            PICTURE_ENDPOINT,
            &[
                ("key", self.api_key.as_str()),
                ("location", query.location.as_str()),
                ("size", size.as_str()),
            ],
        )?;

        if !response.is_success() {
            return Err(ProviderError::HttpStatus {
                endpoint: "picture",
                status: response.status,
            });
        }

        Ok(PictureResponse {
            bytes: response.body,
            headers: response.headers,
        })
    }
}
