//! Staffline wire models
//!
//! Serializable types shared by the search server, the CLI and API clients.
//!
//! # Module Organization
//!
//! - `organization`: location and organizational lookups (states, cities, campuses, departments)
//! - `employee`: the employee entity and its classification lookups (employee types, hiring modes)
//! - `search`: employee search request/response shapes
//!
//! All types serialize with camelCase field names.
//!
//! # Example
//!
//! ```rust
//! use staffline_models::search::EmployeeSearchRequest;
//! use serde_json::json;
//!
//! let request: EmployeeSearchRequest = serde_json::from_value(json!({
//!     "campusId": 12,
//!     "identifierClause": "A100"
//! }))
//! .unwrap();
//! assert_eq!(request.campus_id, Some(12));
//! assert_eq!(request.identifier_clause.as_deref(), Some("A100"));
//! ```

pub mod employee;
pub mod organization;
pub mod search;

pub use employee::{Employee, EmployeeType, HiringMode};
pub use organization::{Campus, CampusCategory, City, Department, State};
pub use search::{EmployeeSearchRecord, EmployeeSearchRequest, SearchPage, NOT_AVAILABLE};
