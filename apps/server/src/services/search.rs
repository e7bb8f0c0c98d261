//! Search service - employee search entry point
//!
//! Orchestrates one search request:
//! - Validating raw input and selecting the variant policy
//! - Normalizing input into a `FilterSpec` and checking it against the policy
//! - Building predicates and running the paginated query
//!
//! Validation always completes before the store is touched, so a rejected
//! request never costs a query.

use std::sync::Arc;
use std::time::Instant;

use staffline_models::{EmployeeSearchRecord, EmployeeSearchRequest, SearchPage};
use validator::Validate;

use crate::config::SearchConfig;
use crate::db::search::{
    FilterSpec, PageRequest, PaginatedQueryExecutor, PredicateBuilder, SearchValidationError,
    SearchVariant, VariantPolicy,
};
use crate::db::traits::EmployeeSearchStore;
use crate::Result;

/// Search service coordinates employee searches
#[derive(Clone)]
pub struct SearchService {
    executor: PaginatedQueryExecutor,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(store: Arc<dyn EmployeeSearchStore>, config: SearchConfig) -> Self {
        Self {
            executor: PaginatedQueryExecutor::new(store),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve caller paging input against the configured defaults and bounds.
    pub fn page_request(&self, offset: Option<i64>, limit: Option<i64>) -> Result<PageRequest> {
        let limit = limit.unwrap_or(self.config.default_limit);
        self.check_max_limit(limit)?;
        Ok(PageRequest::new(offset.unwrap_or(0), limit)?)
    }

    fn check_max_limit(&self, limit: i64) -> std::result::Result<(), SearchValidationError> {
        if limit > self.config.max_limit {
            return Err(SearchValidationError::InvalidPage(format!(
                "limit must not exceed {}, got {}",
                self.config.max_limit, limit
            )));
        }
        Ok(())
    }

    /// Search with the default window: the first `default_limit` matches by id.
    pub async fn search(
        &self,
        variant: SearchVariant,
        request: &EmployeeSearchRequest,
    ) -> Result<SearchPage<EmployeeSearchRecord>> {
        self.search_with_page(variant, request, PageRequest::first(self.config.default_limit))
            .await
    }

    #[tracing::instrument(
        name = "employee_search",
        skip(self, request),
        fields(variant = %variant, offset = page.offset, limit = page.limit)
    )]
    pub async fn search_with_page(
        &self,
        variant: SearchVariant,
        request: &EmployeeSearchRequest,
        page: PageRequest,
    ) -> Result<SearchPage<EmployeeSearchRecord>> {
        let started = Instant::now();
        let result = self.run(variant, request, page).await;
        record_search_metrics(variant, started, &result);

        match &result {
            Ok(page) => tracing::debug!(
                rows = page.len(),
                total_count = page.total_count,
                duration_ms = started.elapsed().as_millis(),
                "Employee search completed"
            ),
            Err(e) if e.is_client_error() => {
                tracing::debug!(error = %e, "Employee search rejected")
            }
            Err(e) => tracing::warn!(error = %e, "Employee search failed"),
        }

        result
    }

    async fn run(
        &self,
        variant: SearchVariant,
        request: &EmployeeSearchRequest,
        page: PageRequest,
    ) -> Result<SearchPage<EmployeeSearchRecord>> {
        request.validate()?;
        self.check_max_limit(page.limit)?;

        let policy =
            VariantPolicy::for_variant(variant).with_anchor_enforcement(self.config.require_anchor);
        let spec = FilterSpec::from_request(request);
        policy.validate(&spec)?;

        let predicates = PredicateBuilder::for_policy(&policy).build(&spec);
        tracing::debug!(
            filters = spec.filter_count(),
            predicates = predicates.len(),
            "Built employee search predicates"
        );

        self.executor.execute(&predicates, page).await
    }
}

fn record_search_metrics(
    variant: SearchVariant,
    started: Instant,
    result: &Result<SearchPage<EmployeeSearchRecord>>,
) {
    let status = match result {
        Ok(_) => "success",
        Err(e) if e.is_client_error() => "client_error",
        Err(_) => "server_error",
    };

    crate::metrics::SEARCH_REQUESTS_TOTAL
        .with_label_values(&[variant.as_str(), status])
        .inc();
    crate::metrics::SEARCH_DURATION_SECONDS
        .with_label_values(&[variant.as_str()])
        .observe(started.elapsed().as_secs_f64());
    if let Ok(page) = result {
        crate::metrics::SEARCH_RESULTS
            .with_label_values(&[variant.as_str()])
            .observe(page.len() as f64);
    }
}
