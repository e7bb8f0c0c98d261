//! Route definitions

pub mod directory;
pub mod employees;
pub mod metrics;
