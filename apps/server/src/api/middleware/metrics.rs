//! Metrics middleware - tracks HTTP request metrics
//!
//! Search-specific counters are recorded by the search service, which knows the
//! variant and outcome; this layer only sees HTTP traffic.

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use prometheus::IntGauge;
use std::time::Instant;

use crate::metrics::{
    sanitize_path, HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS,
    HTTP_REQUEST_SIZE_BYTES, HTTP_RESPONSE_SIZE_BYTES,
};

/// Decrements the in-flight gauge when dropped, including on client disconnect.
struct InFlight(IntGauge);

impl InFlight {
    fn enter(gauge: IntGauge) -> Self {
        gauge.inc();
        Self(gauge)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.dec();
    }
}

fn content_length(headers: &HeaderMap) -> Option<f64> {
    headers
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<f64>().ok())
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = sanitize_path(req.uri().path());

    let _in_flight = InFlight::enter(HTTP_REQUESTS_IN_FLIGHT.with_label_values(&[&method, &path]));

    if let Some(size) = content_length(req.headers()) {
        HTTP_REQUEST_SIZE_BYTES
            .with_label_values(&[&method, &path])
            .observe(size);
    }

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &path])
        .observe(start.elapsed().as_secs_f64());

    if let Some(size) = content_length(response.headers()) {
        HTTP_RESPONSE_SIZE_BYTES
            .with_label_values(&[&method, &path, &status])
            .observe(size);
    }

    response
}
