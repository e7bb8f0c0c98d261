//! Typed filter values for an employee search.
//!
//! A `FilterSpec` is built fresh from caller input for every request. It only
//! normalizes values (trimming text, dropping blanks); whether a combination is
//! acceptable is decided by the variant policy.

use staffline_models::EmployeeSearchRequest;

/// Optional locator filters recognized by the search engine.
///
/// The identifier clause is not a locator and is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    State,
    City,
    Campus,
    Department,
    EmployeeType,
    Category,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::State,
        FilterField::City,
        FilterField::Campus,
        FilterField::Department,
        FilterField::EmployeeType,
        FilterField::Category,
    ];

    /// Request parameter name as seen by API callers.
    pub fn param_name(self) -> &'static str {
        match self {
            FilterField::State => "stateId",
            FilterField::City => "cityId",
            FilterField::Campus => "campusId",
            FilterField::Department => "departmentId",
            FilterField::EmployeeType => "employeeTypeId",
            FilterField::Category => "categoryName",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub state_id: Option<i64>,
    pub city_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub department_id: Option<i64>,
    pub employee_type_id: Option<i64>,
    pub category_name: Option<String>,
    pub identifier_clause: Option<String>,
}

impl FilterSpec {
    pub fn from_request(request: &EmployeeSearchRequest) -> Self {
        Self {
            state_id: request.state_id,
            city_id: request.city_id,
            campus_id: request.campus_id,
            department_id: request.department_id,
            employee_type_id: request.employee_type_id,
            category_name: normalize_text(request.category_name.as_deref()),
            identifier_clause: normalize_text(request.identifier_clause.as_deref()),
        }
    }

    pub fn has(&self, field: FilterField) -> bool {
        match field {
            FilterField::State => self.state_id.is_some(),
            FilterField::City => self.city_id.is_some(),
            FilterField::Campus => self.campus_id.is_some(),
            FilterField::Department => self.department_id.is_some(),
            FilterField::EmployeeType => self.employee_type_id.is_some(),
            FilterField::Category => self.category_name.is_some(),
        }
    }

    /// Locator filters carrying a value, in declaration order.
    pub fn present_filters(&self) -> impl Iterator<Item = FilterField> + '_ {
        FilterField::ALL.into_iter().filter(|field| self.has(*field))
    }

    pub fn has_identifier(&self) -> bool {
        self.identifier_clause.is_some()
    }

    /// Number of supplied filters, identifier clause included.
    pub fn filter_count(&self) -> usize {
        self.present_filters().count() + usize::from(self.has_identifier())
    }
}

fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
