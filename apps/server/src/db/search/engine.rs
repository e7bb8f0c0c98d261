//! Paginated search execution.
//!
//! Runs the total count and the page fetch for one predicate set against an
//! `EmployeeSearchStore`, then projects the fetched rows. The two reads are
//! not taken from one snapshot: a write landing between them can make the
//! total disagree with the rows actually returned.

use std::sync::Arc;

use staffline_models::{EmployeeSearchRecord, SearchPage};

use super::policy::SearchValidationError;
use super::predicate::PredicateSet;
use super::projection::ProjectionMapper;
use crate::db::traits::EmployeeSearchStore;
use crate::Result;

/// Rows returned when a caller does not ask for a page size.
pub const DEFAULT_PAGE_LIMIT: i64 = 2000;

/// Offset/limit window over matches ordered by ascending employee id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64) -> std::result::Result<Self, SearchValidationError> {
        if offset < 0 {
            return Err(SearchValidationError::InvalidPage(format!(
                "offset must be zero or greater, got {}",
                offset
            )));
        }
        if limit < 1 {
            return Err(SearchValidationError::InvalidPage(format!(
                "limit must be at least 1, got {}",
                limit
            )));
        }
        Ok(Self { offset, limit })
    }

    /// First `limit` matches.
    pub fn first(limit: i64) -> Self {
        Self { offset: 0, limit }
    }
}

#[derive(Clone)]
pub struct PaginatedQueryExecutor {
    store: Arc<dyn EmployeeSearchStore>,
}

impl PaginatedQueryExecutor {
    pub fn new(store: Arc<dyn EmployeeSearchStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        predicates: &PredicateSet,
        page: PageRequest,
    ) -> Result<SearchPage<EmployeeSearchRecord>> {
        let total_count = self.store.count_matches(predicates).await?;
        let rows = self.store.fetch_page(predicates, page).await?;

        tracing::debug!(
            rows = rows.len(),
            total_count,
            offset = page.offset,
            limit = page.limit,
            "Executed paginated employee search"
        );

        let fetched = SearchPage {
            rows,
            total_count,
            offset: page.offset,
            limit: page.limit,
        };
        Ok(fetched.map(ProjectionMapper::project))
    }
}
