//! Flattening of joined employee rows into search records.

use staffline_models::{EmployeeSearchRecord, NOT_AVAILABLE};

use crate::models::EmployeeRow;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionMapper;

impl ProjectionMapper {
    /// Joined names fall back to `N/A`; joined ids are passed through unchanged.
    pub fn project(row: EmployeeRow) -> EmployeeSearchRecord {
        let full_name = row.full_name();
        EmployeeSearchRecord {
            id: row.id,
            full_name,
            payroll_id: row.payroll_id,
            department_name: or_placeholder(row.department_name),
            hiring_mode_name: or_placeholder(row.hiring_mode_name),
            temp_payroll_id: row.temp_payroll_id,
            state_id: row.state_id,
            state_name: or_placeholder(row.state_name),
            city_id: row.city_id,
            city_name: or_placeholder(row.city_name),
            campus_id: row.campus_id,
            campus_name: or_placeholder(row.campus_name),
            category_name: or_placeholder(row.category_name),
            employee_type_id: row.employee_type_id,
            employee_type_name: or_placeholder(row.employee_type_name),
        }
    }
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
