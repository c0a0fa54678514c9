//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use pawmart_service::context::RequestContext;

/// Logs request method, path, status, duration, and the caller identity if known.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let identity = response
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.identity.clone());

    info!(
        method = %method,
        path = %uri.path(),
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        identity = identity.as_deref().unwrap_or("-"),
        "HTTP request"
    );

    response
}
