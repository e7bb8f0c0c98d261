//! Core traits for employee storage backends
//!
//! Search and lookup code only talks to these traits. The PostgreSQL
//! repositories back the running server; the in-memory store backs tests and
//! local tooling.

use async_trait::async_trait;
use serde::Deserialize;
use staffline_models::{
    Campus, CampusCategory, City, Department, EmployeeType, HiringMode, State,
};

use crate::db::search::{PageRequest, PredicateSet};
use crate::models::EmployeeRow;
use crate::Result;

/// Read access to join-resolved employees for searches.
#[async_trait]
pub trait EmployeeSearchStore: Send + Sync {
    /// Matching rows ordered by ascending employee id, windowed by `page`.
    async fn fetch_page(
        &self,
        predicates: &PredicateSet,
        page: PageRequest,
    ) -> Result<Vec<EmployeeRow>>;

    /// Number of rows matching `predicates`, ignoring any window.
    async fn count_matches(&self, predicates: &PredicateSet) -> Result<i64>;
}

/// Optional narrowing for campus lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusFilter {
    pub state_id: Option<i64>,
    pub city_id: Option<i64>,
}

/// Reference data used to populate search filters, plus single-employee reads.
///
/// Every list is ordered by name, then id.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn list_states(&self) -> Result<Vec<State>>;

    /// Cities, optionally restricted to one state.
    async fn list_cities(&self, state_id: Option<i64>) -> Result<Vec<City>>;

    async fn list_campuses(&self, filter: CampusFilter) -> Result<Vec<Campus>>;

    async fn list_campus_categories(&self) -> Result<Vec<CampusCategory>>;

    async fn list_departments(&self) -> Result<Vec<Department>>;

    async fn list_employee_types(&self) -> Result<Vec<EmployeeType>>;

    async fn list_hiring_modes(&self) -> Result<Vec<HiringMode>>;

    /// One employee with its joined reference data, whatever its status.
    async fn find_employee(&self, id: i64) -> Result<Option<EmployeeRow>>;

    /// Cheap liveness probe of the backing store.
    async fn ping(&self) -> Result<()>;
}
