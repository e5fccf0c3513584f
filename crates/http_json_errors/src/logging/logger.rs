/// Severity handed to a [`Logger`]. The emitted line uses the level chosen in
/// `Options::level`; send failures are always `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Sink for the line written each time an error response is emitted.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str);
}
