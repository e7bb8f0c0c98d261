//! Employee search request and response shapes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Placeholder rendered for joined name fields whose source row is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Caller input shared by every search variant.
///
/// Which fields are mandatory, allowed or rejected depends on the variant the
/// request is submitted to; this type only carries the values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSearchRequest {
    pub state_id: Option<i64>,
    pub city_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub department_id: Option<i64>,
    pub employee_type_id: Option<i64>,
    /// Campus category name, matched case-insensitively.
    #[validate(length(max = 255))]
    pub category_name: Option<String>,
    /// A payroll identifier, a name fragment, or a comma-separated list of payroll identifiers.
    #[validate(length(max = 4000))]
    pub identifier_clause: Option<String>,
}

/// Flattened, join-resolved employee record returned by searches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSearchRecord {
    pub id: i64,
    pub full_name: String,
    pub payroll_id: Option<String>,
    pub department_name: String,
    pub hiring_mode_name: String,
    pub temp_payroll_id: Option<String>,
    pub state_id: Option<i64>,
    pub state_name: String,
    pub city_id: Option<i64>,
    pub city_name: String,
    pub campus_id: Option<i64>,
    pub campus_name: String,
    pub category_name: String,
    pub employee_type_id: Option<i64>,
    pub employee_type_name: String,
}

/// One page of results plus the total number of matches.
///
/// `total_count` covers every match of the filter set, independent of `offset`/`limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<T> {
    pub rows: Vec<T>,
    pub total_count: i64,
    pub offset: i64,
    pub limit: i64,
}

impl<T> SearchPage<T> {
    pub fn empty(offset: i64, limit: i64) -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
            offset,
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether matches exist beyond this page.
    pub fn has_more(&self) -> bool {
        self.offset + (self.rows.len() as i64) < self.total_count
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SearchPage<U> {
        SearchPage {
            rows: self.rows.into_iter().map(f).collect(),
            total_count: self.total_count,
            offset: self.offset,
            limit: self.limit,
        }
    }
}
