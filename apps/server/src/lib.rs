//! Staffline - employee search service
//!
//! Locates employees by organizational and geographic attributes:
//! - Four search variants sharing one filter shape, each with its own validation policy
//! - Dynamic predicate construction rendered to parameterized SQL
//! - Offset/limit pagination with an independent total count
//! - Reference data lookups used to populate search filters

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
