pub mod logger;
pub mod tracing_logger;

pub use logger::{Level, Logger};
pub use tracing_logger::{TARGET, TracingLogger};
