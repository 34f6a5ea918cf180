use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log every request with its latency. Server errors log at `warn`.
///
/// Bodies are never read here, so note text stays out of the logs.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let latency_ms = started.elapsed().as_millis() as u64;
    let status = response.status();
    if status.is_server_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), latency_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), latency_ms, "request served");
    }

    response
}
