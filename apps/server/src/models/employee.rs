//! Join-resolved employee rows.

/// An employee together with its left-joined reference data.
///
/// Every joined column is optional: a missing department, campus, city, state,
/// category, employee type or hiring mode never excludes the employee. Joined
/// ids come from the joined row, so they are `None` when the reference points
/// at a row that does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub payroll_id: Option<String>,
    pub temp_payroll_id: Option<String>,
    pub active: bool,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub hiring_mode_id: Option<i64>,
    pub hiring_mode_name: Option<String>,
    pub campus_id: Option<i64>,
    pub campus_name: Option<String>,
    pub city_id: Option<i64>,
    pub city_name: Option<String>,
    pub state_id: Option<i64>,
    pub state_name: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub employee_type_id: Option<i64>,
    pub employee_type_name: Option<String>,
}

impl EmployeeRow {
    /// First name and last name joined by a single space; missing parts are empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }
}
