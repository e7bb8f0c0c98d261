//! Predicate construction for employee searches.
//!
//! A search is a conjunction of predicates. Two of them are always present
//! (the employee is active and has a payroll identifier); every other
//! predicate is contributed by a per-field rule that fires only when its
//! filter carries a value.
//!
//! The same `PredicateSet` is rendered to SQL by the query builder or
//! evaluated directly against join-resolved rows by the in-memory store.

use super::filter_spec::FilterSpec;
use super::identifier::{identifier_tokens, IdentifierTokens};
use super::policy::{MatchMode, VariantPolicy};
use crate::models::EmployeeRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `active = true`
    Active,
    /// `payroll_id IS NOT NULL`
    HasPayrollId,
    StateId(i64),
    CityId(i64),
    CampusId(i64),
    DepartmentId(i64),
    EmployeeTypeId(i64),
    /// Case-insensitive equality against the campus category name.
    CategoryName(String),
    /// Exact membership of the payroll identifier; names are not consulted.
    PayrollIdIn(Vec<String>),
    /// Exact payroll identifier, or a case-insensitive substring of the first,
    /// last or full name.
    IdentifierOrName(String),
}

impl Predicate {
    pub fn matches(&self, row: &EmployeeRow) -> bool {
        match self {
            Predicate::Active => row.active,
            Predicate::HasPayrollId => row.payroll_id.is_some(),
            Predicate::StateId(id) => row.state_id == Some(*id),
            Predicate::CityId(id) => row.city_id == Some(*id),
            Predicate::CampusId(id) => row.campus_id == Some(*id),
            Predicate::DepartmentId(id) => row.department_id == Some(*id),
            Predicate::EmployeeTypeId(id) => row.employee_type_id == Some(*id),
            Predicate::CategoryName(name) => row
                .category_name
                .as_deref()
                .is_some_and(|category| category.to_lowercase() == name.to_lowercase()),
            Predicate::PayrollIdIn(tokens) => row
                .payroll_id
                .as_deref()
                .is_some_and(|payroll| tokens.iter().any(|t| t == payroll)),
            Predicate::IdentifierOrName(token) => {
                if row.payroll_id.as_deref() == Some(token.as_str()) {
                    return true;
                }
                let needle = token.to_lowercase();
                let contains = |value: Option<&str>| {
                    value
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(needle.as_str())
                };
                contains(row.first_name.as_deref())
                    || contains(row.last_name.as_deref())
                    || contains(Some(row.full_name().as_str()))
            }
        }
    }
}

/// AND of terms, built from optional contributions.
///
/// Terms keep their insertion order so that rendered output is stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjunction<P> {
    terms: Vec<P>,
}

impl<P> Default for Conjunction<P> {
    fn default() -> Self {
        Self { terms: Vec::new() }
    }
}

impl<P> Conjunction<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, term: P) -> &mut Self {
        self.terms.push(term);
        self
    }

    /// Add every present term, skipping `None`s.
    pub fn extend_present<I>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = Option<P>>,
    {
        self.terms.extend(terms.into_iter().flatten());
        self
    }

    pub fn terms(&self) -> &[P] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when every term satisfies `test` (vacuously true when empty).
    pub fn evaluate(&self, mut test: impl FnMut(&P) -> bool) -> bool {
        self.terms.iter().all(|term| test(term))
    }

    /// Render terms with `render` and join them with `AND`.
    pub fn render(&self, render: impl FnMut(&P) -> String) -> String {
        if self.terms.is_empty() {
            return "TRUE".to_string();
        }
        self.terms
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

impl<P> FromIterator<Option<P>> for Conjunction<P> {
    fn from_iter<I: IntoIterator<Item = Option<P>>>(iter: I) -> Self {
        let mut conjunction = Self::new();
        conjunction.extend_present(iter);
        conjunction
    }
}

pub type PredicateSet = Conjunction<Predicate>;

impl PredicateSet {
    pub fn matches(&self, row: &EmployeeRow) -> bool {
        self.evaluate(|predicate| predicate.matches(row))
    }
}

type FieldRule = fn(&FilterSpec, MatchMode) -> Option<Predicate>;

/// One rule per filter field, applied in this order.
const FIELD_RULES: &[FieldRule] = &[
    |spec, _| spec.state_id.map(Predicate::StateId),
    |spec, _| spec.city_id.map(Predicate::CityId),
    |spec, _| spec.campus_id.map(Predicate::CampusId),
    |spec, _| spec.department_id.map(Predicate::DepartmentId),
    |spec, _| spec.employee_type_id.map(Predicate::EmployeeTypeId),
    |spec, _| spec.category_name.clone().map(Predicate::CategoryName),
    identifier_rule,
];

fn identifier_rule(spec: &FilterSpec, mode: MatchMode) -> Option<Predicate> {
    let clause = spec.identifier_clause.as_deref()?;
    match identifier_tokens(clause, mode)? {
        IdentifierTokens::Single(token) => Some(Predicate::IdentifierOrName(token)),
        IdentifierTokens::List(tokens) => Some(Predicate::PayrollIdIn(tokens)),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PredicateBuilder {
    match_mode: MatchMode,
}

impl PredicateBuilder {
    pub fn new(match_mode: MatchMode) -> Self {
        Self { match_mode }
    }

    pub fn for_policy(policy: &VariantPolicy) -> Self {
        Self::new(policy.match_mode())
    }

    pub fn build(&self, spec: &FilterSpec) -> PredicateSet {
        let mut predicates = PredicateSet::new();
        predicates
            .push(Predicate::Active)
            .push(Predicate::HasPayrollId)
            .extend_present(FIELD_RULES.iter().map(|rule| rule(spec, self.match_mode)));
        predicates
    }
}
