//! Search variants and the validation policy attached to each.
//!
//! All four variants share one `FilterSpec` shape and one predicate builder.
//! A policy only decides which filter combinations are accepted and whether
//! the identifier clause is read as a single value or a comma-separated list.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::filter_spec::{FilterField, FilterSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchVariant {
    Simple,
    Advanced,
    AdvancedList,
    List,
}

impl SearchVariant {
    pub const ALL: [SearchVariant; 4] = [
        SearchVariant::Simple,
        SearchVariant::Advanced,
        SearchVariant::AdvancedList,
        SearchVariant::List,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchVariant::Simple => "simple",
            SearchVariant::Advanced => "advanced",
            SearchVariant::AdvancedList => "advanced-list",
            SearchVariant::List => "list",
        }
    }
}

impl fmt::Display for SearchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchVariant {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchVariant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::NotFound(format!("Unknown search variant: {s}")))
    }
}

/// How the identifier clause is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole clause is one token.
    Single,
    /// The clause is a comma-separated list of tokens.
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
}

/// Rejections raised before any predicate is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchValidationError {
    #[error("{variant} search requires identifierClause")]
    MissingIdentifier { variant: &'static str },

    #[error("{variant} search requires at least one of: {expected}")]
    MissingAnchor {
        variant: &'static str,
        expected: String,
    },

    #[error("{field} is not supported by {variant} search")]
    UnsupportedFilter {
        variant: &'static str,
        field: &'static str,
    },

    #[error("invalid page: {0}")]
    InvalidPage(String),
}

/// Filters that may anchor a search in the stricter variants.
const ANCHOR_FILTERS: &[FilterField] = &[
    FilterField::City,
    FilterField::EmployeeType,
    FilterField::Campus,
    FilterField::Category,
];

const ALL_FILTERS: &[FilterField] = &FilterField::ALL;

const NO_FILTERS: &[FilterField] = &[];

#[derive(Debug, Clone, Copy)]
pub struct VariantPolicy {
    variant: SearchVariant,
    identifier: Requirement,
    match_mode: MatchMode,
    allowed_filters: &'static [FilterField],
    anchor_filters: &'static [FilterField],
    enforce_anchor: bool,
}

impl VariantPolicy {
    pub fn for_variant(variant: SearchVariant) -> Self {
        let (identifier, match_mode, allowed_filters, anchor_filters) = match variant {
            SearchVariant::Simple => (
                Requirement::Required,
                MatchMode::Single,
                ANCHOR_FILTERS,
                ANCHOR_FILTERS,
            ),
            SearchVariant::Advanced => (
                Requirement::Optional,
                MatchMode::Single,
                ALL_FILTERS,
                NO_FILTERS,
            ),
            SearchVariant::AdvancedList => (
                Requirement::Optional,
                MatchMode::Multi,
                ALL_FILTERS,
                NO_FILTERS,
            ),
            SearchVariant::List => (
                Requirement::Optional,
                MatchMode::Multi,
                ANCHOR_FILTERS,
                ANCHOR_FILTERS,
            ),
        };

        Self {
            variant,
            identifier,
            match_mode,
            allowed_filters,
            anchor_filters,
            enforce_anchor: true,
        }
    }

    /// Toggle the anchor requirement of the stricter variants.
    pub fn with_anchor_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_anchor = enforce;
        self
    }

    pub fn variant(&self) -> SearchVariant {
        self.variant
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn requires_identifier(&self) -> bool {
        self.identifier == Requirement::Required
    }

    pub fn requires_anchor(&self) -> bool {
        self.enforce_anchor && !self.anchor_filters.is_empty()
    }

    pub fn allows(&self, field: FilterField) -> bool {
        self.allowed_filters.contains(&field)
    }

    pub fn validate(&self, spec: &FilterSpec) -> Result<(), SearchValidationError> {
        let variant = self.variant.as_str();

        if let Some(field) = spec.present_filters().find(|f| !self.allows(*f)) {
            return Err(SearchValidationError::UnsupportedFilter {
                variant,
                field: field.param_name(),
            });
        }

        if self.requires_identifier() && !spec.has_identifier() {
            return Err(SearchValidationError::MissingIdentifier { variant });
        }

        if self.requires_anchor() && !self.anchor_filters.iter().any(|f| spec.has(*f)) {
            let expected = self
                .anchor_filters
                .iter()
                .map(|f| f.param_name())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(SearchValidationError::MissingAnchor { variant, expected });
        }

        Ok(())
    }
}
