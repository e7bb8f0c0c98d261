//! Per-request context injected by `request_id_middleware`.
//!
//! Handlers receive it as `Option<Extension<RequestContext>>`, since routers
//! built without the middleware stack (such as in unit tests) never set it.

#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Server-generated id, also returned in `x-request-id`.
    pub request_id: String,
}
