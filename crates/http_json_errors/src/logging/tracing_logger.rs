use crate::logging::{Level, Logger};
use tracing::{debug, error, info, trace, warn};

/// Target of every event this logger emits, for filtering with `RUST_LOG=http_json_errors=...`.
pub const TARGET: &str = "http_json_errors";

/// A logger implementation that uses the tracing crate.
///
/// Installed when debug mode is requested without an explicit logger.
#[derive(Debug, Clone, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, msg: &str) {
        match level {
            Level::Error => error!(target: TARGET, "{}", msg),
            Level::Warn => warn!(target: TARGET, "{}", msg),
            Level::Info => info!(target: TARGET, "{}", msg),
            Level::Debug => debug!(target: TARGET, "{}", msg),
            Level::Trace => trace!(target: TARGET, "{}", msg),
        }
    }
}
