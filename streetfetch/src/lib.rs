//! StreetFetch - Status-gated Google Street View Static API fetcher
//!
//! This library fetches Street View panoramas for a location and persists
//! three artifacts on disk: the metadata document, the picture bytes, and
//! the picture response headers. The metadata endpoint is free to query;
//! the picture endpoint is billable, so a picture is only requested after
//! a metadata lookup for the same location reported `OK`.
//!
//! # High-Level API
//!
//! For most use cases, the [`fetcher`] module provides a simplified facade:
//!
//! ```ignore
//! use streetfetch::config::FetcherConfig;
//! use streetfetch::fetcher::PanoramaFetcher;
//! use streetfetch::http::ReqwestClient;
//!
//! let config = FetcherConfig::new(api_key, "123 Main St, Malmö");
//! let mut fetcher = PanoramaFetcher::new(config, ReqwestClient::new()?);
//!
//! fetcher.fetch_metadata()?;
//! let outcome = fetcher.fetch_picture()?;
//! ```

pub mod config;
pub mod fetcher;
pub mod http;
pub mod log;
pub mod logging;
pub mod metadata;
pub mod paths;
pub mod provider;
pub mod query;
pub mod store;

/// Version of the StreetFetch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
