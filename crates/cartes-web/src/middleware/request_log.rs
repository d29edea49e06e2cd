use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::session::session_id_from_headers;

/// One structured event per request, tagged with the caller's session
/// when the request carries a session cookie.
pub async fn request_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let session = session_id_from_headers(req.headers())
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        session = %session,
        "http_request"
    );

    response
}
