//! Logging abstraction layer.
//!
//! Components log through the [`Logger`] trait instead of calling a
//! logging crate directly. The fetcher's `verbose` flag maps onto a logger
//! choice: [`TracingLogger`] when fetch narration is wanted,
//! [`NoOpLogger`] for silent operation (and for tests).
//!
//! Components that need logging accept an `Arc<dyn Logger>` and use the
//! provided macros:
//!
//! ```
//! use streetfetch::log::{Logger, NoOpLogger};
//! use streetfetch::log_info;
//! use std::sync::Arc;
//!
//! struct Downloader {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl Downloader {
//!     fn run(&self) {
//!         log_info!(self.logger, "Obtained metadata for {}", "Oslo");
//!     }
//! }
//!
//! let downloader = Downloader { logger: Arc::new(NoOpLogger) };
//! downloader.run();
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
