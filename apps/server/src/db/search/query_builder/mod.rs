//! SQL query builder for employee searches.
//!
//! Renders a `PredicateSet` into a page query and a count query over the
//! same joined relation. Both queries share one WHERE clause, so the count
//! always describes exactly the rows the page query can return.

use super::engine::PageRequest;
use super::predicate::PredicateSet;

mod bind;
mod clauses;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    TextArray(Vec<String>),
    BigInt(i64),
}

/// Columns aliased to the fields of `EmployeeRow`.
const SELECT_COLUMNS: &str = "e.id AS id, \
     e.first_name AS first_name, \
     e.last_name AS last_name, \
     e.payroll_id AS payroll_id, \
     e.temp_payroll_id AS temp_payroll_id, \
     e.active AS active, \
     d.id AS department_id, \
     d.name AS department_name, \
     hm.id AS hiring_mode_id, \
     hm.name AS hiring_mode_name, \
     c.id AS campus_id, \
     c.name AS campus_name, \
     ci.id AS city_id, \
     ci.name AS city_name, \
     s.id AS state_id, \
     s.name AS state_name, \
     cc.id AS category_id, \
     cc.name AS category_name, \
     et.id AS employee_type_id, \
     et.name AS employee_type_name";

/// Every reference is a LEFT JOIN: missing reference data never drops an employee.
const FROM_CLAUSE: &str = "employees e \
     LEFT JOIN departments d ON d.id = e.department_id \
     LEFT JOIN hiring_modes hm ON hm.id = e.hiring_mode_id \
     LEFT JOIN campuses c ON c.id = e.campus_id \
     LEFT JOIN cities ci ON ci.id = c.city_id \
     LEFT JOIN states s ON s.id = c.state_id \
     LEFT JOIN campus_categories cc ON cc.id = c.category_id \
     LEFT JOIN employee_types et ON et.id = e.employee_type_id";

pub struct QueryBuilder<'a> {
    predicates: &'a PredicateSet,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(predicates: &'a PredicateSet) -> Self {
        Self { predicates }
    }

    /// Page query ordered by employee id.
    pub fn build_sql(&self, page: PageRequest) -> (String, Vec<BindValue>) {
        let mut bind_params = Vec::new();
        let where_clause = self.build_where(&mut bind_params);

        let sql = format!(
            "SELECT {} FROM {} WHERE {} ORDER BY e.id ASC LIMIT {} OFFSET {}",
            SELECT_COLUMNS, FROM_CLAUSE, where_clause, page.limit, page.offset
        );
        (sql, bind_params)
    }

    pub fn build_count_sql(&self) -> (String, Vec<BindValue>) {
        let mut bind_params = Vec::new();
        let where_clause = self.build_where(&mut bind_params);

        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {}",
            FROM_CLAUSE, where_clause
        );
        (sql, bind_params)
    }

    fn build_where(&self, bind_params: &mut Vec<BindValue>) -> String {
        self.predicates
            .render(|predicate| clauses::build_predicate_clause(predicate, bind_params))
    }
}

/// Single joined employee by id, regardless of active or payroll state.
pub fn employee_by_id_sql() -> String {
    format!("SELECT {} FROM {} WHERE e.id = $1", SELECT_COLUMNS, FROM_CLAUSE)
}
