//! Request handlers for API endpoints
//!
//! Handlers coordinate between routes and services, handling:
//! - Request extraction and validation
//! - Service invocation
//! - Response formatting

pub mod directory;
pub mod metrics;
pub mod search;

pub use directory::*;
pub use metrics::*;
pub use search::*;
