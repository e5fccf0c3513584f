use std::fmt::Display;
use std::sync::Arc;

use http::StatusCode;

use crate::category::{Category, with_categories};
use crate::error::SendError;
use crate::logging::{Level, Logger, TARGET, TracingLogger};
use crate::record::ErrorRecord;
use crate::response::ResponseWriter;
use crate::send::{JsonSend, SendStrategy};

/// Settings applied by [`Responder::configure`]. Unset fields leave the current value alone.
#[derive(Clone, Default)]
pub struct Options {
    /// Log every emitted error. Falls back to [`TracingLogger`] when `logger` is unset.
    pub debug: bool,
    pub logger: Option<Arc<dyn Logger>>,
    /// Level of the `"<status>: <message>"` line. Defaults to [`Level::Error`].
    pub level: Option<Level>,
    pub send: Option<Arc<dyn SendStrategy>>,
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("debug", &self.debug)
            .field("logger", &self.logger.is_some())
            .field("level", &self.level)
            .field("send", &self.send.is_some())
            .finish()
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn logger<L: Logger + 'static>(mut self, logger: L) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn send_strategy<S: SendStrategy + 'static>(mut self, send: S) -> Self {
        self.send = Some(Arc::new(send));
        self
    }
}

/// Writes JSON error responses. Holds the optional logger and the send strategy.
///
/// Cloning is cheap; clones share the same logger and strategy.
#[derive(Clone)]
pub struct Responder {
    logger: Option<Arc<dyn Logger>>,
    level: Level,
    send: Arc<dyn SendStrategy>,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            logger: None,
            level: Level::Error,
            send: Arc::new(JsonSend),
        }
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("logging", &self.logger.is_some())
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Responder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        let mut responder = Self::new();
        responder.configure(options);
        responder
    }

    pub fn configure(&mut self, options: Options) {
        match options.logger {
            Some(logger) => self.logger = Some(logger),
            None if options.debug => self.logger = Some(Arc::new(TracingLogger::new())),
            None => {}
        }

        if let Some(level) = options.level {
            self.level = level;
        }

        if let Some(send) = options.send {
            self.send = send;
        }
    }

    /// Back to JSON bodies and no logging at [`Level::Error`].
    pub fn configure_defaults(&mut self) {
        *self = Self::default();
    }

    pub fn logger(&self) -> Option<&Arc<dyn Logger>> {
        self.logger.as_ref()
    }

    /// Log, build the record and hand it to the send strategy.
    pub fn emit<E: Display + ?Sized>(
        &self,
        w: &mut dyn ResponseWriter,
        status: StatusCode,
        err: &E,
    ) -> Result<(), SendError> {
        let record = ErrorRecord::from_error(status, err);

        if let Some(logger) = &self.logger {
            logger.log(
                self.level,
                &format!("{}: {}", status.as_u16(), record.message()),
            );
        }

        self.send.send(w, status, &record)
    }

    /// Emit for `category`. A failed send is logged, not returned.
    ///
    /// The failure goes to the configured logger at [`Level::Error`] and to `tracing`.
    pub fn respond<E: Display + ?Sized>(
        &self,
        category: Category,
        w: &mut dyn ResponseWriter,
        err: &E,
    ) {
        let status = category.status();
        if let Err(e) = self.emit(w, status, err) {
            if let Some(logger) = &self.logger {
                logger.log(
                    Level::Error,
                    &format!("{}: failed to send error response: {}", status.as_u16(), e),
                );
            }
            tracing::error!(
                target: TARGET,
                status_code = %status,
                error = %e,
                "Failed to send error response",
            );
        }
    }
}

macro_rules! responder_methods {
    ($(($variant:ident, $method:ident, $code:literal, $status:ident, $phrase:literal)),* $(,)?) => {
        impl Responder {
            $(
                #[doc = concat!("Sends an error with status ", stringify!($code), " ", $phrase, ".")]
                pub fn $method<E: Display + ?Sized>(&self, w: &mut dyn ResponseWriter, err: &E) {
                    self.respond(Category::$variant, w, err)
                }
            )*
        }
    };
}

with_categories!(responder_methods);
