//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (list, path)
//! - [`fetch`] - Gated metadata and picture fetch for a location
//! - [`init`] - Configuration initialization
//! - [`show`] - Inspect a previously fetched picture

pub mod common;
pub mod config;
pub mod fetch;
pub mod init;
pub mod show;
