//! Uniform JSON error responses.
//!
//! Every error goes out as `{"statusCode": <int>, "message": "<string>"}` with
//! `Content-Type: application/json`. Pick the category, pass the writer and
//! the error:
//!
//! ```
//! use http_json_errors::{Responder, Response};
//!
//! let responder = Responder::new();
//! let mut res = Response::new();
//! responder.not_found(&mut res, "user missing");
//!
//! assert_eq!(res.status().as_u16(), 404);
//! assert_eq!(&res.body[..], br#"{"statusCode":404,"message":"user missing"}"#);
//! ```

pub mod category;
pub mod error;
pub mod global;
pub mod logging;
pub mod record;
pub mod responder;
pub mod response;
pub mod send;
#[cfg(feature = "pingora")]
pub mod session;

// Re-export commonly used types at the crate root
pub use category::Category;
pub use error::SendError;
pub use global::{configure, configure_defaults};
pub use http::StatusCode;
pub use logging::*;
pub use record::ErrorRecord;
pub use responder::{Options, Responder};
pub use response::{Response, ResponseWriter};
pub use send::{JsonSend, SendStrategy};
#[cfg(feature = "pingora")]
pub use session::write_response;
