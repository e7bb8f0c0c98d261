pub mod assertions;
pub mod fixtures;
pub mod shared;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use futures::FutureExt as _;
use serde_json::Value;
use sqlx::Connection as _;
use staffline::{api::create_router, db::Dataset, db::InMemoryEmployeeStore, AppState, Config};
use std::sync::Arc;
use tower::ServiceExt as _;
use url::Url;
use uuid::Uuid;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    schema: Option<TestSchema>,
}

struct TestSchema {
    name: String,
    admin_database_url: String,
}

impl TestApp {
    /// App over the standard fixture dataset held in memory.
    pub fn new() -> Self {
        Self::in_memory(fixtures::dataset(), |_| {})
    }

    pub fn in_memory(dataset: Dataset, configure: impl FnOnce(&mut Config)) -> Self {
        shared::init_tracing();
        let mut config = Config::default();
        configure(&mut config);

        let store = Arc::new(InMemoryEmployeeStore::new(dataset));
        let state = AppState::with_stores(config, store.clone(), store);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            schema: None,
        }
    }

    /// App over PostgreSQL in a fresh schema seeded with `dataset`.
    ///
    /// Returns `None` when no test database is configured.
    pub async fn postgres(dataset: &Dataset) -> anyhow::Result<Option<Self>> {
        let shared = shared::shared().await?;
        let Some(admin_database_url) = shared.test_database_url.clone() else {
            return Ok(None);
        };
        let mut config = shared.base_config.clone();

        let schema = format!("test_{}", Uuid::new_v4().simple());
        let mut admin_conn = sqlx::PgConnection::connect(&admin_database_url)
            .await
            .context("connect admin db for schema create")?;
        sqlx::query(&format!(r#"CREATE SCHEMA "{}""#, schema))
            .execute(&mut admin_conn)
            .await
            .context("create test schema")?;

        config.database.url = with_search_path(&admin_database_url, &schema)?;
        config.database.run_migrations = true;
        // Each test owns a pool; keep them small so parallel tests do not
        // exhaust Postgres connections.
        config.database.pool_min_size = 0;
        config.database.pool_max_size = 2;

        let state = AppState::new(config).await.context("initialize AppState")?;
        let pool = state.db_pool.clone().context("postgres state has a pool")?;
        fixtures::seed(&pool, dataset).await.context("seed fixtures")?;

        let router = create_router(state.clone());

        Ok(Some(Self {
            router,
            state,
            schema: Some(TestSchema {
                name: schema,
                admin_database_url,
            }),
        }))
    }

    pub async fn cleanup(self) -> anyhow::Result<()> {
        let Some(schema) = self.schema else {
            return Ok(());
        };
        if let Some(pool) = &self.state.db_pool {
            pool.close().await;
        }

        let mut admin_conn = sqlx::PgConnection::connect(&schema.admin_database_url)
            .await
            .context("connect admin db for schema drop")?;
        sqlx::query(&format!(r#"DROP SCHEMA "{}" CASCADE"#, schema.name))
            .execute(&mut admin_conn)
            .await
            .context("drop test schema")?;

        Ok(())
    }

    pub async fn get(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request(Method::GET, path_and_query, None).await
    }

    /// GET and parse the body as JSON.
    pub async fn get_json(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, HeaderMap, Value)> {
        let (status, headers, body) = self.get(path_and_query).await?;
        let json = serde_json::from_slice(&body)
            .with_context(|| format!("parse JSON body of {path_and_query}"))?;
        Ok((status, headers, json))
    }

    /// POST a JSON body and parse the response as JSON.
    pub async fn post_json(
        &self,
        path_and_query: &str,
        body: &Value,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Value)> {
        let bytes = Bytes::from(serde_json::to_vec(body)?);
        let (status, headers, body) = self
            .request(Method::POST, path_and_query, Some(bytes))
            .await?;
        let json = serde_json::from_slice(&body)
            .with_context(|| format!("parse JSON body of {path_and_query}"))?;
        Ok((status, headers, json))
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Bytes>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, path_and_query, body, &[])
            .await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Bytes>,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut request = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "example.org")
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .body(match body {
                Some(bytes) => Body::from(bytes),
                None => Body::empty(),
            })
            .context("build request")?;

        for (name, value) in extra_headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }
}

/// Run `f` against a Postgres-backed app, dropping its schema afterwards.
///
/// Skips (returning `Ok`) when no test database is configured.
pub async fn with_postgres_app<F>(dataset: &Dataset, f: F) -> anyhow::Result<()>
where
    F: for<'a> FnOnce(
        &'a TestApp,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = anyhow::Result<()>> + 'a>,
    >,
{
    let Some(app) = TestApp::postgres(dataset).await? else {
        eprintln!("skipping: {} is not set", shared::TEST_DATABASE_URL_ENV);
        return Ok(());
    };

    let result = std::panic::AssertUnwindSafe(f(&app)).catch_unwind().await;
    let cleanup_result = app.cleanup().await;

    if let Err(e) = cleanup_result {
        eprintln!("test schema cleanup failed: {e:?}");
    }

    match result {
        Ok(r) => r,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

fn with_search_path(database_url: &str, schema: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(database_url).context("parse database URL")?;
    url.query_pairs_mut()
        .append_pair("options", &format!("-c search_path={}", schema));
    Ok(url.to_string())
}
