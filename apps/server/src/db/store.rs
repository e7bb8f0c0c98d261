//! PostgreSQL implementation of `EmployeeSearchStore`

use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;

use crate::db::search::{BindValue, PageRequest, PredicateSet, QueryBuilder};
use crate::db::traits::EmployeeSearchStore;
use crate::metrics::observe_db_query;
use crate::models::EmployeeRow;
use crate::Result;

#[derive(Clone)]
pub struct PostgresEmployeeStore {
    pool: PgPool,
}

impl PostgresEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EmployeeSearchStore for PostgresEmployeeStore {
    async fn fetch_page(
        &self,
        predicates: &PredicateSet,
        page: PageRequest,
    ) -> Result<Vec<EmployeeRow>> {
        let (sql, bind_values) = QueryBuilder::new(predicates).build_sql(page);
        tracing::trace!(sql = %sql, binds = bind_values.len(), "Employee page query");

        let mut query = sqlx::query_as::<_, EmployeeRow>(&sql);
        for value in bind_values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::TextArray(vs) => query.bind(vs),
                BindValue::BigInt(v) => query.bind(v),
            };
        }

        let started = Instant::now();
        let result = query.fetch_all(&self.pool).await;
        observe_db_query("search_page", started, &result);

        result.map_err(crate::Error::Database)
    }

    async fn count_matches(&self, predicates: &PredicateSet) -> Result<i64> {
        let (sql, bind_values) = QueryBuilder::new(predicates).build_count_sql();
        tracing::trace!(sql = %sql, binds = bind_values.len(), "Employee count query");

        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for value in bind_values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::TextArray(vs) => query.bind(vs),
                BindValue::BigInt(v) => query.bind(v),
            };
        }

        let started = Instant::now();
        let result = query.fetch_one(&self.pool).await;
        observe_db_query("search_count", started, &result);

        result.map_err(crate::Error::Database)
    }
}
