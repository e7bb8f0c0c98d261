//! Directory repository - reference data lookups
//!
//! Serves the location and organizational lists callers use to build search
//! filters, and single-employee reads.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use staffline_models::{
    Campus, CampusCategory, City, Department, EmployeeType, HiringMode, State,
};
use std::time::Instant;

use crate::db::search::query_builder::employee_by_id_sql;
use crate::db::traits::{CampusFilter, DirectoryStore};
use crate::metrics::observe_db_query;
use crate::models::EmployeeRow;
use crate::{Error, Result};

/// Repository for reference data
#[derive(Clone)]
pub struct PostgresDirectoryRepository {
    pool: PgPool,
}

impl PostgresDirectoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// `SELECT id, name FROM <table>` for the simple two-column lookups.
    async fn list_named<T>(
        &self,
        query_type: &str,
        sql: &str,
        build: impl Fn(i64, String) -> T,
    ) -> Result<Vec<T>> {
        let started = Instant::now();
        let result = sqlx::query(sql).fetch_all(&self.pool).await;
        observe_db_query(query_type, started, &result);

        result
            .map_err(Error::Database)?
            .iter()
            .map(|row| -> std::result::Result<T, sqlx::Error> {
                Ok(build(row.try_get("id")?, row.try_get("name")?))
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Database)
    }
}

fn city_from_row(row: &PgRow) -> std::result::Result<City, sqlx::Error> {
    Ok(City {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        state_id: row.try_get("state_id")?,
    })
}

fn campus_from_row(row: &PgRow) -> std::result::Result<Campus, sqlx::Error> {
    Ok(Campus {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        code: row.try_get("code")?,
        campus_type: row.try_get("type")?,
        city_id: row.try_get("city_id")?,
        state_id: row.try_get("state_id")?,
        category_id: row.try_get("category_id")?,
    })
}

#[async_trait]
impl DirectoryStore for PostgresDirectoryRepository {
    async fn list_states(&self) -> Result<Vec<State>> {
        self.list_named(
            "list_states",
            "SELECT id, name FROM states ORDER BY name, id",
            |id, name| State { id, name },
        )
        .await
    }

    async fn list_cities(&self, state_id: Option<i64>) -> Result<Vec<City>> {
        let started = Instant::now();
        let result = sqlx::query(
            "SELECT id, name, state_id FROM cities
             WHERE ($1::BIGINT IS NULL OR state_id = $1)
             ORDER BY name, id",
        )
        .bind(state_id)
        .fetch_all(&self.pool)
        .await;
        observe_db_query("list_cities", started, &result);

        result
            .map_err(Error::Database)?
            .iter()
            .map(city_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Database)
    }

    async fn list_campuses(&self, filter: CampusFilter) -> Result<Vec<Campus>> {
        let started = Instant::now();
        let result = sqlx::query(
            "SELECT id, name, code, type, city_id, state_id, category_id FROM campuses
             WHERE ($1::BIGINT IS NULL OR state_id = $1)
               AND ($2::BIGINT IS NULL OR city_id = $2)
             ORDER BY name, id",
        )
        .bind(filter.state_id)
        .bind(filter.city_id)
        .fetch_all(&self.pool)
        .await;
        observe_db_query("list_campuses", started, &result);

        result
            .map_err(Error::Database)?
            .iter()
            .map(campus_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Database)
    }

    async fn list_campus_categories(&self) -> Result<Vec<CampusCategory>> {
        self.list_named(
            "list_campus_categories",
            "SELECT id, name FROM campus_categories ORDER BY name, id",
            |id, name| CampusCategory { id, name },
        )
        .await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.list_named(
            "list_departments",
            "SELECT id, name FROM departments ORDER BY name, id",
            |id, name| Department { id, name },
        )
        .await
    }

    async fn list_employee_types(&self) -> Result<Vec<EmployeeType>> {
        self.list_named(
            "list_employee_types",
            "SELECT id, name FROM employee_types ORDER BY name, id",
            |id, name| EmployeeType { id, name },
        )
        .await
    }

    async fn list_hiring_modes(&self) -> Result<Vec<HiringMode>> {
        self.list_named(
            "list_hiring_modes",
            "SELECT id, name FROM hiring_modes ORDER BY name, id",
            |id, name| HiringMode { id, name },
        )
        .await
    }

    async fn find_employee(&self, id: i64) -> Result<Option<EmployeeRow>> {
        let sql = employee_by_id_sql();
        let started = Instant::now();
        let result = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        observe_db_query("find_employee", started, &result);

        result.map_err(Error::Database)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}
