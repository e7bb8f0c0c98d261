//! In-memory storage backend
//!
//! Holds a complete dataset in process and resolves joins with the same
//! left-join semantics as the SQL queries. Used by tests, and by the CLI when
//! searching a JSON dataset file instead of a database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use staffline_models::{
    Campus, CampusCategory, City, Department, Employee, EmployeeType, HiringMode, State,
};
use std::sync::Arc;

use crate::db::search::{PageRequest, PredicateSet};
use crate::db::traits::{CampusFilter, DirectoryStore, EmployeeSearchStore};
use crate::models::EmployeeRow;
use crate::Result;

/// Every table the search and directory operations read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub states: Vec<State>,
    pub cities: Vec<City>,
    pub campus_categories: Vec<CampusCategory>,
    pub campuses: Vec<Campus>,
    pub departments: Vec<Department>,
    pub employee_types: Vec<EmployeeType>,
    pub hiring_modes: Vec<HiringMode>,
    pub employees: Vec<Employee>,
}

impl Dataset {
    /// Resolve one employee against the reference tables.
    ///
    /// A dangling reference leaves both the joined id and name empty.
    pub fn join(&self, employee: &Employee) -> EmployeeRow {
        let department = find(&self.departments, employee.department_id, |d| d.id);
        let hiring_mode = find(&self.hiring_modes, employee.hiring_mode_id, |h| h.id);
        let employee_type = find(&self.employee_types, employee.employee_type_id, |t| t.id);
        let campus = find(&self.campuses, employee.campus_id, |c| c.id);
        let city = campus.and_then(|c| find(&self.cities, c.city_id, |ci| ci.id));
        let state = campus.and_then(|c| find(&self.states, c.state_id, |s| s.id));
        let category = campus.and_then(|c| find(&self.campus_categories, c.category_id, |cc| cc.id));

        EmployeeRow {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            payroll_id: employee.payroll_id.clone(),
            temp_payroll_id: employee.temp_payroll_id.clone(),
            active: employee.active,
            department_id: department.map(|d| d.id),
            department_name: department.map(|d| d.name.clone()),
            hiring_mode_id: hiring_mode.map(|h| h.id),
            hiring_mode_name: hiring_mode.map(|h| h.name.clone()),
            campus_id: campus.map(|c| c.id),
            campus_name: campus.map(|c| c.name.clone()),
            city_id: city.map(|c| c.id),
            city_name: city.map(|c| c.name.clone()),
            state_id: state.map(|s| s.id),
            state_name: state.map(|s| s.name.clone()),
            category_id: category.map(|c| c.id),
            category_name: category.map(|c| c.name.clone()),
            employee_type_id: employee_type.map(|t| t.id),
            employee_type_name: employee_type.map(|t| t.name.clone()),
        }
    }

    /// All employees joined, ordered by id.
    pub fn joined_rows(&self) -> Vec<EmployeeRow> {
        let mut rows: Vec<EmployeeRow> = self.employees.iter().map(|e| self.join(e)).collect();
        rows.sort_by_key(|row| row.id);
        rows
    }
}

fn find<T>(items: &[T], id: Option<i64>, key: impl Fn(&T) -> i64) -> Option<&T> {
    let id = id?;
    items.iter().find(|item| key(item) == id)
}

fn sorted_by_name<T: Clone>(items: &[T], key: impl Fn(&T) -> (&str, i64)) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| key(a).cmp(&key(b)));
    sorted
}

/// Dataset-backed store implementing both storage traits.
///
/// Joins are resolved once at construction; the dataset is immutable afterwards.
#[derive(Clone)]
pub struct InMemoryEmployeeStore {
    dataset: Arc<Dataset>,
    rows: Arc<Vec<EmployeeRow>>,
}

impl InMemoryEmployeeStore {
    pub fn new(dataset: Dataset) -> Self {
        let rows = dataset.joined_rows();
        Self {
            dataset: Arc::new(dataset),
            rows: Arc::new(rows),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn matching<'a>(
        &'a self,
        predicates: &'a PredicateSet,
    ) -> impl Iterator<Item = &'a EmployeeRow> + 'a {
        self.rows.iter().filter(move |row| predicates.matches(row))
    }
}

#[async_trait]
impl EmployeeSearchStore for InMemoryEmployeeStore {
    async fn fetch_page(
        &self,
        predicates: &PredicateSet,
        page: PageRequest,
    ) -> Result<Vec<EmployeeRow>> {
        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(0);
        Ok(self
            .matching(predicates)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_matches(&self, predicates: &PredicateSet) -> Result<i64> {
        Ok(self.matching(predicates).count() as i64)
    }
}

#[async_trait]
impl DirectoryStore for InMemoryEmployeeStore {
    async fn list_states(&self) -> Result<Vec<State>> {
        Ok(sorted_by_name(&self.dataset.states, |s| (s.name.as_str(), s.id)))
    }

    async fn list_cities(&self, state_id: Option<i64>) -> Result<Vec<City>> {
        let mut cities = sorted_by_name(&self.dataset.cities, |c| (c.name.as_str(), c.id));
        if let Some(state_id) = state_id {
            cities.retain(|c| c.state_id == Some(state_id));
        }
        Ok(cities)
    }

    async fn list_campuses(&self, filter: CampusFilter) -> Result<Vec<Campus>> {
        let mut campuses = sorted_by_name(&self.dataset.campuses, |c| (c.name.as_str(), c.id));
        campuses.retain(|c| {
            filter.state_id.map_or(true, |id| c.state_id == Some(id))
                && filter.city_id.map_or(true, |id| c.city_id == Some(id))
        });
        Ok(campuses)
    }

    async fn list_campus_categories(&self) -> Result<Vec<CampusCategory>> {
        Ok(sorted_by_name(&self.dataset.campus_categories, |c| {
            (c.name.as_str(), c.id)
        }))
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        Ok(sorted_by_name(&self.dataset.departments, |d| (d.name.as_str(), d.id)))
    }

    async fn list_employee_types(&self) -> Result<Vec<EmployeeType>> {
        Ok(sorted_by_name(&self.dataset.employee_types, |t| (t.name.as_str(), t.id)))
    }

    async fn list_hiring_modes(&self) -> Result<Vec<HiringMode>> {
        Ok(sorted_by_name(&self.dataset.hiring_modes, |h| (h.name.as_str(), h.id)))
    }

    async fn find_employee(&self, id: i64) -> Result<Option<EmployeeRow>> {
        Ok(self.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
