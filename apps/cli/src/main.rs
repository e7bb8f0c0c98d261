//! Staffline CLI
//!
//! Runs employee searches and directory lookups against PostgreSQL (using the
//! server configuration) or against a JSON dataset file.
//!
//! Usage:
//!   staffline search list --city-id 7 --identifier "A100,A101"
//!   staffline --dataset staff.json search simple --campus-id 12 --identifier doe
//!   staffline lookup campuses --state-id 1
//!   staffline migrate

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use staffline::config::Config;
use staffline::db::search::SearchVariant;
use staffline::db::{
    CampusFilter, Dataset, DirectoryStore, EmployeeSearchStore, InMemoryEmployeeStore,
    PostgresDirectoryRepository, PostgresEmployeeStore,
};
use staffline::services::{DirectoryService, SearchService};
use staffline::{logging, state};
use staffline_models::EmployeeSearchRequest;

#[derive(Parser, Debug)]
#[command(name = "staffline", version)]
#[command(about = "Search employees by organizational and geographic attributes")]
struct Cli {
    /// Read data from a JSON dataset file instead of the database
    #[arg(long, global = true, env = "STAFFLINE_DATASET")]
    dataset: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an employee search
    Search(SearchArgs),

    /// Show one employee by id
    Employee {
        id: i64,
    },

    /// List reference data
    Lookup {
        kind: LookupKind,

        /// Restrict cities or campuses to one state
        #[arg(long)]
        state_id: Option<i64>,

        /// Restrict campuses to one city
        #[arg(long)]
        city_id: Option<i64>,
    },

    /// Apply database migrations
    Migrate,
}

#[derive(clap::Args, Debug)]
struct SearchArgs {
    /// simple, advanced, advanced-list or list
    #[arg(value_parser = parse_variant)]
    variant: SearchVariant,

    #[arg(long)]
    state_id: Option<i64>,

    #[arg(long)]
    city_id: Option<i64>,

    #[arg(long)]
    campus_id: Option<i64>,

    #[arg(long)]
    department_id: Option<i64>,

    #[arg(long)]
    employee_type_id: Option<i64>,

    /// Campus category name (case-insensitive)
    #[arg(long)]
    category: Option<String>,

    /// Payroll id or name fragment; list variants accept comma-separated payroll ids
    #[arg(long)]
    identifier: Option<String>,

    #[arg(long)]
    offset: Option<i64>,

    #[arg(long)]
    limit: Option<i64>,
}

impl SearchArgs {
    fn request(&self) -> EmployeeSearchRequest {
        EmployeeSearchRequest {
            state_id: self.state_id,
            city_id: self.city_id,
            campus_id: self.campus_id,
            department_id: self.department_id,
            employee_type_id: self.employee_type_id,
            category_name: self.category.clone(),
            identifier_clause: self.identifier.clone(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LookupKind {
    States,
    Cities,
    Campuses,
    CampusCategories,
    Departments,
    EmployeeTypes,
    HiringModes,
}

fn parse_variant(value: &str) -> std::result::Result<SearchVariant, String> {
    value.parse().map_err(|_| {
        format!(
            "unknown variant '{}', expected one of: {}",
            value,
            SearchVariant::ALL.map(|v| v.as_str()).join(", ")
        )
    })
}

struct Backend {
    config: Config,
    search: Arc<dyn EmployeeSearchStore>,
    directory: Arc<dyn DirectoryStore>,
}

async fn backend(dataset: Option<&PathBuf>) -> Result<Backend> {
    let config = Config::load().context("Failed to load configuration")?;

    if let Some(path) = dataset {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset {}", path.display()))?;
        let dataset: Dataset = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
        tracing::debug!(employees = dataset.employees.len(), "Loaded dataset");

        let store = Arc::new(InMemoryEmployeeStore::new(dataset));
        return Ok(Backend {
            config,
            search: store.clone(),
            directory: store,
        });
    }

    let pool = state::connect_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    Ok(Backend {
        config,
        search: Arc::new(PostgresEmployeeStore::new(pool.clone())),
        directory: Arc::new(PostgresDirectoryRepository::new(pool)),
    })
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

async fn migrate(dataset: Option<&PathBuf>) -> Result<()> {
    if dataset.is_some() {
        anyhow::bail!("migrate works against the database, not a dataset file");
    }
    let config = Config::load().context("Failed to load configuration")?;
    let pool = state::connect_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    state::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;
    eprintln!("Migrations applied");
    Ok(())
}

async fn search(backend: Backend, args: SearchArgs, pretty: bool) -> Result<()> {
    let service = SearchService::new(backend.search, backend.config.search.clone());
    let page = service.page_request(args.offset, args.limit)?;
    let result = service
        .search_with_page(args.variant, &args.request(), page)
        .await?;
    print_json(&result, pretty)
}

async fn lookup(
    directory: DirectoryService,
    kind: LookupKind,
    filter: CampusFilter,
    pretty: bool,
) -> Result<()> {
    match kind {
        LookupKind::States => print_json(&directory.states().await?, pretty),
        LookupKind::Cities => print_json(&directory.cities(filter.state_id).await?, pretty),
        LookupKind::Campuses => print_json(&directory.campuses(filter).await?, pretty),
        LookupKind::CampusCategories => print_json(&directory.campus_categories().await?, pretty),
        LookupKind::Departments => print_json(&directory.departments().await?, pretty),
        LookupKind::EmployeeTypes => print_json(&directory.employee_types().await?, pretty),
        LookupKind::HiringModes => print_json(&directory.hiring_modes().await?, pretty),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_simple_logging();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_ref();

    match cli.command {
        Command::Migrate => migrate(dataset).await,
        Command::Search(args) => search(backend(dataset).await?, args, cli.pretty).await,
        Command::Employee { id } => {
            let directory = DirectoryService::new(backend(dataset).await?.directory);
            print_json(&directory.employee(id).await?, cli.pretty)
        }
        Command::Lookup {
            kind,
            state_id,
            city_id,
        } => {
            let directory = DirectoryService::new(backend(dataset).await?.directory);
            lookup(directory, kind, CampusFilter { state_id, city_id }, cli.pretty).await
        }
    }
}
