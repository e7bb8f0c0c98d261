//! Directory service - reference data and single-employee reads

use std::sync::Arc;

use staffline_models::{
    Campus, CampusCategory, City, Department, EmployeeSearchRecord, EmployeeType, HiringMode,
    State,
};

use crate::db::search::ProjectionMapper;
use crate::db::traits::{CampusFilter, DirectoryStore};
use crate::{Error, Result};

#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn DirectoryStore>,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    pub async fn states(&self) -> Result<Vec<State>> {
        self.store.list_states().await
    }

    pub async fn cities(&self, state_id: Option<i64>) -> Result<Vec<City>> {
        self.store.list_cities(state_id).await
    }

    pub async fn campuses(&self, filter: CampusFilter) -> Result<Vec<Campus>> {
        self.store.list_campuses(filter).await
    }

    pub async fn campus_categories(&self) -> Result<Vec<CampusCategory>> {
        self.store.list_campus_categories().await
    }

    pub async fn departments(&self) -> Result<Vec<Department>> {
        self.store.list_departments().await
    }

    pub async fn employee_types(&self) -> Result<Vec<EmployeeType>> {
        self.store.list_employee_types().await
    }

    pub async fn hiring_modes(&self) -> Result<Vec<HiringMode>> {
        self.store.list_hiring_modes().await
    }

    /// One employee in search-record shape.
    ///
    /// Unlike searches, inactive employees and those without a payroll
    /// identifier are returned too.
    pub async fn employee(&self, id: i64) -> Result<EmployeeSearchRecord> {
        self.store
            .find_employee(id)
            .await?
            .map(ProjectionMapper::project)
            .ok_or_else(|| Error::NotFound(format!("Employee {} not found", id)))
    }

    pub async fn ping(&self) -> Result<()> {
        self.store.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::{Dataset, InMemoryEmployeeStore};
    use staffline_models::{Employee, NOT_AVAILABLE};

    fn service() -> DirectoryService {
        let dataset = Dataset {
            employees: vec![Employee {
                id: 3,
                first_name: Some("Temp".to_string()),
                last_name: Some("Person".to_string()),
                payroll_id: None,
                temp_payroll_id: Some("T-9".to_string()),
                active: false,
                department_id: None,
                campus_id: None,
                employee_type_id: None,
                hiring_mode_id: None,
            }],
            ..Default::default()
        };
        DirectoryService::new(Arc::new(InMemoryEmployeeStore::new(dataset)))
    }

    #[tokio::test]
    async fn employee_read_includes_excluded_from_search() {
        let record = service().employee(3).await.unwrap();
        assert_eq!(record.full_name, "Temp Person");
        assert_eq!(record.temp_payroll_id.as_deref(), Some("T-9"));
        assert_eq!(record.campus_name, NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn missing_employee_is_not_found() {
        let err = service().employee(42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
