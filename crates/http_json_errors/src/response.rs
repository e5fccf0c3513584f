use bytes::{Bytes, BytesMut};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

/// A sink that an error response is written into.
///
/// Implementors must accept the status before any body bytes. Only the first
/// status written takes effect.
pub trait ResponseWriter {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    fn write_status(&mut self, status: StatusCode);

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()>;
}

/// In-memory response. Collects what a send strategy writes.
#[derive(Debug, Clone, Default)]
pub struct Response {
    pub status: Option<StatusCode>,
    pub headers: HeaderMap,
    pub body: BytesMut,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status that will go on the wire. A response nobody wrote a status for is a 200.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON.
    pub fn json_body<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Convert into an `http::Response`, setting content-length unless one is present.
    pub fn into_http(self) -> http::Response<Bytes> {
        let status = self.status();
        let body = self.body.freeze();
        let mut headers = self.headers;
        if !headers.contains_key(http::header::CONTENT_LENGTH) {
            headers.insert(http::header::CONTENT_LENGTH, HeaderValue::from(body.len()));
        }

        let mut res = http::Response::new(body);
        *res.status_mut() = status;
        *res.headers_mut() = headers;
        res
    }
}

impl ResponseWriter for Response {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_status_wins() {
        let mut res = Response::new();
        res.write_status(StatusCode::NOT_FOUND);
        res.write_status(StatusCode::OK);
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn body_without_status_implies_ok() {
        let mut res = Response::new();
        res.write_body(b"hello").unwrap();
        res.write_status(StatusCode::BAD_REQUEST);
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body.as_ref(), b"hello");
    }

    #[test]
    fn into_http_sets_content_length() {
        let mut res = Response::new();
        res.set_header(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        res.write_status(StatusCode::CONFLICT);
        res.write_body(b"{}").unwrap();

        let http_res = res.into_http();
        assert_eq!(http_res.status(), StatusCode::CONFLICT);
        assert_eq!(
            http_res.headers().get(http::header::CONTENT_LENGTH).unwrap(),
            &HeaderValue::from_static("2")
        );
        assert_eq!(http_res.body().as_ref(), b"{}");
    }

    #[test]
    fn manual_content_length_not_overridden() {
        let mut res = Response::new();
        res.set_header(http::header::CONTENT_LENGTH, HeaderValue::from_static("999"));
        res.write_body(b"abc").unwrap();
        let http_res = res.into_http();
        assert_eq!(
            http_res.headers().get(http::header::CONTENT_LENGTH).unwrap(),
            &HeaderValue::from_static("999")
        );
    }
}
