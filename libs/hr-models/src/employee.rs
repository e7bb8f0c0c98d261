//! Employee classification lookups.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeType {
    pub id: i64,
    pub name: String,
}

/// How an employee was hired (permanent, contract, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringMode {
    pub id: i64,
    pub name: String,
}

/// Stored employee entity with its unresolved references.
///
/// `payroll_id` stays empty until onboarding completes; such employees never
/// appear in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub payroll_id: Option<String>,
    pub temp_payroll_id: Option<String>,
    pub active: bool,
    pub department_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub employee_type_id: Option<i64>,
    pub hiring_mode_id: Option<i64>,
}
