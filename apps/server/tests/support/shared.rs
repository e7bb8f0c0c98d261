use anyhow::Context as _;
use staffline::Config;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub const TEST_DATABASE_URL_ENV: &str = "STAFFLINE__DATABASE__TEST_DATABASE_URL";

static SHARED: OnceCell<Arc<SharedTestResources>> = OnceCell::const_new();

pub struct SharedTestResources {
    pub base_config: Config,
    /// Admin URL of the database that hosts per-test schemas.
    pub test_database_url: Option<String>,
}

pub async fn shared() -> anyhow::Result<Arc<SharedTestResources>> {
    SHARED
        .get_or_try_init(|| async {
            init_tracing();

            let config = Config::load().context("load Config for tests")?;
            let test_database_url = config.database.test_database_url.clone();

            Ok(Arc::new(SharedTestResources {
                base_config: config,
                test_database_url,
            }))
        })
        .await
        .cloned()
}

pub fn init_tracing() {
    use std::sync::OnceLock;
    use tracing_subscriber::prelude::*;
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "staffline=info,sqlx=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}
