//! Layer factories for middleware

use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// HTTP-level tracing; request fields are recorded by `request_id_middleware`.
pub fn trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// CORS middleware
///
/// `*` anywhere in the list allows every origin. Searches are read-only, so
/// `GET`, `POST` and `OPTIONS` are the only methods advertised.
pub fn cors(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        // No permissive headers unless explicitly configured.
        return CorsLayer::new();
    }

    let methods = [
        axum::http::Method::GET,
        axum::http::Method::POST,
        axum::http::Method::OPTIONS,
    ];

    if origins.iter().any(|o| o.trim() == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
            .expose_headers(exposed_headers());
    }

    let mut header_values = Vec::with_capacity(origins.len());
    for origin in origins {
        if let Ok(value) = axum::http::HeaderValue::from_str(origin.trim()) {
            header_values.push(value);
        }
    }

    // If all configured origins were invalid, fall back to no CORS.
    if header_values.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(header_values))
        .allow_methods(methods)
        .allow_headers(Any)
        .expose_headers(exposed_headers())
}

fn exposed_headers() -> [axum::http::HeaderName; 2] {
    [
        axum::http::HeaderName::from_static("x-total-count"),
        axum::http::HeaderName::from_static("x-request-id"),
    ]
}

/// Compression middleware
pub fn compression() -> CompressionLayer {
    CompressionLayer::new()
}
