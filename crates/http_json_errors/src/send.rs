use http::{HeaderValue, StatusCode};

use crate::error::SendError;
use crate::record::ErrorRecord;
use crate::response::ResponseWriter;

/// Turns an [`ErrorRecord`] into bytes on the wire.
pub trait SendStrategy: Send + Sync {
    fn send(
        &self,
        w: &mut dyn ResponseWriter,
        status: StatusCode,
        record: &ErrorRecord,
    ) -> Result<(), SendError>;
}

impl<F> SendStrategy for F
where
    F: Fn(&mut dyn ResponseWriter, StatusCode, &ErrorRecord) -> Result<(), SendError>
        + Send
        + Sync,
{
    fn send(
        &self,
        w: &mut dyn ResponseWriter,
        status: StatusCode,
        record: &ErrorRecord,
    ) -> Result<(), SendError> {
        self(w, status, record)
    }
}

/// Built-in strategy: JSON body with `application/json` content type.
///
/// Nothing is written when serialization fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSend;

impl SendStrategy for JsonSend {
    fn send(
        &self,
        w: &mut dyn ResponseWriter,
        status: StatusCode,
        record: &ErrorRecord,
    ) -> Result<(), SendError> {
        let body = record.to_json()?;

        w.set_header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        w.write_status(status);
        w.write_body(&body)?;
        Ok(())
    }
}
