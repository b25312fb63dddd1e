//! No-operation logger implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// A logger that discards all messages.
///
/// This is what a fetcher constructed with `verbose = false` narrates
/// into. Also handy in unit tests where log output would be noise.
/// Failures are never routed through the logger alone, so silencing it
/// cannot hide an error from the caller.
///
/// # Example
///
/// ```
/// use streetfetch::log::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info(format_args!("This message is discarded"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {
        // Intentionally empty
    }
}
