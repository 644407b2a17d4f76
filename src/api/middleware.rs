//! API Middleware
//!
//! Correlation IDs and request logging.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::domain::OperationContext;

/// Header carrying the caller's correlation ID
pub const CORRELATION_HEADER: &str = "x-correlation-id";

// =========================================================================
// Correlation ID Middleware
// =========================================================================

/// Attach an `OperationContext` to every request.
///
/// Reuses a valid `X-Correlation-Id` header or generates a new ID, and echoes
/// it on the response.
pub async fn context_middleware(mut request: Request<Body>, next: Next) -> Response {
    let correlation_id = correlation_id_from(request.headers());

    let mut context = OperationContext::new().with_correlation_id(correlation_id);
    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        context = context.with_client_ip(addr.ip());
    }

    request.extensions_mut().insert(context);

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response.headers_mut().insert(CORRELATION_HEADER, value);
    }
    response
}

/// Parse the correlation header, falling back to a fresh UUID
pub fn correlation_id_from(headers: &HeaderMap) -> Uuid {
    headers
        .get(CORRELATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4)
}

// =========================================================================
// mask_headers_for_logging
// =========================================================================

/// Headers that should be masked in logs
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "set-cookie"];

/// Mask sensitive headers for logging
pub fn mask_headers_for_logging(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            let masked_value = if SENSITIVE_HEADERS.contains(&name_lower.as_str()) {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("[invalid utf8]").to_string()
            };
            (name.to_string(), masked_value)
        })
        .collect()
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Request logging middleware. Must run inside `context_middleware`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let headers = mask_headers_for_logging(request.headers());

    let (correlation_id, client_ip) = request
        .extensions()
        .get::<OperationContext>()
        .map(|ctx| (ctx.correlation_id, ctx.client_ip))
        .unwrap_or_default();

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        correlation_id = ?correlation_id,
        client_ip = ?client_ip,
        headers = ?headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = %start.elapsed().as_millis(),
        correlation_id = ?correlation_id,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_headers_for_logging() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("authorization", "Bearer secret".parse().unwrap());

        let masked = mask_headers_for_logging(&headers);

        let auth = masked.iter().find(|(k, _)| k == "authorization");
        let content_type = masked.iter().find(|(k, _)| k == "content-type");

        assert_eq!(auth.unwrap().1, "[REDACTED]");
        assert_eq!(content_type.unwrap().1, "application/json");
    }

    #[test]
    fn test_correlation_id_reused_when_valid() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_HEADER, id.to_string().parse().unwrap());
        assert_eq!(correlation_id_from(&headers), id);
    }

    #[test]
    fn test_correlation_id_generated_when_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_HEADER, "not-a-uuid".parse().unwrap());
        let generated = correlation_id_from(&headers);
        assert_ne!(generated.to_string(), "not-a-uuid");
        assert_ne!(correlation_id_from(&headers), generated);
    }

    #[tokio::test]
    async fn test_context_middleware_records_client_ip_and_echoes_id() {
        use axum::{extract::Extension, routing::get, Router};
        use tower::util::ServiceExt;

        async fn client_ip(Extension(ctx): Extension<OperationContext>) -> String {
            ctx.client_ip.map(|ip| ip.to_string()).unwrap_or_default()
        }

        let app = Router::new()
            .route("/ip", get(client_ip))
            .layer(axum::middleware::from_fn(context_middleware));

        let id = Uuid::new_v4();
        let addr: SocketAddr = "192.168.1.20:4000".parse().unwrap();
        let mut request = Request::builder()
            .uri("/ip")
            .header(CORRELATION_HEADER, id.to_string())
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[CORRELATION_HEADER].to_str().unwrap(),
            id.to_string()
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"192.168.1.20");
    }
}
