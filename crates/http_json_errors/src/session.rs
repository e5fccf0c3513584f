use http::Method;
use pingora::protocols::http::ServerSession;
use pingora_http::ResponseHeader;

use crate::response::Response;

/// Write a buffered error response to a pingora session and flush it.
///
/// The body is skipped for HEAD requests.
pub async fn write_response(http: &mut ServerSession, res: Response) -> pingora::Result<()> {
    let is_head = http.req_header().method == Method::HEAD;

    let (parts, body) = res.into_http().into_parts();
    let resp_header: ResponseHeader = parts.into();
    http.write_response_header(Box::new(resp_header)).await?;

    if !is_head {
        http.write_response_body(body, true).await?;
    }
    http.finish_body().await
}
