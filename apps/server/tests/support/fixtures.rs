//! Shared reference data and employees for API tests.
//!
//! | id | name         | payroll | active | dept    | campus            | type    |
//! |----|--------------|---------|--------|---------|-------------------|---------|
//! | 1  | John Doe     | A100    | yes    | Eng     | North (Northport) | Faculty |
//! | 2  | Jane Roe     | A101    | yes    | Eng     | North (Northport) | Staff   |
//! | 3  | Temp Person  | -       | yes    | Eng     | North (Northport) | Faculty |
//! | 4  | Old Timer    | A102    | no     | Eng     | North (Northport) | Faculty |
//! | 5  | Mary Major   | A200    | yes    | Finance | Harbor (Southvale)| Staff   |
//! | 6  | Ann Doe      | A300    | yes    | Finance | Ridge (Ridgeview) | Faculty |
//! | 7  | Lost Record  | A400    | yes    | -       | missing row 999   | -       |

use anyhow::Context as _;
use sqlx::PgPool;
use staffline::db::Dataset;
use staffline_models::{
    Campus, CampusCategory, City, Department, Employee, EmployeeType, HiringMode, State,
};

pub const RIVERLAND: i64 = 1;
pub const HILLSHIRE: i64 = 2;

pub const NORTHPORT: i64 = 10;
pub const SOUTHVALE: i64 = 11;
pub const RIDGEVIEW: i64 = 20;

pub const MAIN_CATEGORY: i64 = 100;
pub const SATELLITE_CATEGORY: i64 = 101;

pub const NORTH_CAMPUS: i64 = 12;
pub const HARBOR_CAMPUS: i64 = 13;
pub const RIDGE_CAMPUS: i64 = 21;

pub const ENG: i64 = 1;
pub const FINANCE: i64 = 2;

pub const FACULTY: i64 = 1;
pub const STAFF: i64 = 2;

pub const PERMANENT: i64 = 1;
pub const CONTRACT: i64 = 2;

pub fn dataset() -> Dataset {
    Dataset {
        states: vec![state(RIVERLAND, "Riverland"), state(HILLSHIRE, "Hillshire")],
        cities: vec![
            city(NORTHPORT, "Northport", RIVERLAND),
            city(SOUTHVALE, "Southvale", RIVERLAND),
            city(RIDGEVIEW, "Ridgeview", HILLSHIRE),
        ],
        campus_categories: vec![
            CampusCategory {
                id: MAIN_CATEGORY,
                name: "Main".to_string(),
            },
            CampusCategory {
                id: SATELLITE_CATEGORY,
                name: "Satellite".to_string(),
            },
        ],
        campuses: vec![
            campus(NORTH_CAMPUS, "North Campus", NORTHPORT, RIVERLAND, MAIN_CATEGORY),
            campus(HARBOR_CAMPUS, "Harbor Campus", SOUTHVALE, RIVERLAND, SATELLITE_CATEGORY),
            campus(RIDGE_CAMPUS, "Ridge Campus", RIDGEVIEW, HILLSHIRE, MAIN_CATEGORY),
        ],
        departments: vec![
            Department {
                id: ENG,
                name: "Eng".to_string(),
            },
            Department {
                id: FINANCE,
                name: "Finance".to_string(),
            },
        ],
        employee_types: vec![
            EmployeeType {
                id: FACULTY,
                name: "Faculty".to_string(),
            },
            EmployeeType {
                id: STAFF,
                name: "Staff".to_string(),
            },
        ],
        hiring_modes: vec![
            HiringMode {
                id: PERMANENT,
                name: "Permanent".to_string(),
            },
            HiringMode {
                id: CONTRACT,
                name: "Contract".to_string(),
            },
        ],
        employees: vec![
            EmployeeBuilder::new(1, "John", "Doe")
                .payroll("A100")
                .placed(ENG, NORTH_CAMPUS, FACULTY)
                .hired(PERMANENT)
                .build(),
            EmployeeBuilder::new(2, "Jane", "Roe")
                .payroll("A101")
                .placed(ENG, NORTH_CAMPUS, STAFF)
                .hired(CONTRACT)
                .build(),
            EmployeeBuilder::new(3, "Temp", "Person")
                .temp_payroll("T-3")
                .placed(ENG, NORTH_CAMPUS, FACULTY)
                .build(),
            EmployeeBuilder::new(4, "Old", "Timer")
                .payroll("A102")
                .placed(ENG, NORTH_CAMPUS, FACULTY)
                .inactive()
                .build(),
            EmployeeBuilder::new(5, "Mary", "Major")
                .payroll("A200")
                .placed(FINANCE, HARBOR_CAMPUS, STAFF)
                .hired(PERMANENT)
                .build(),
            EmployeeBuilder::new(6, "Ann", "Doe")
                .payroll("A300")
                .placed(FINANCE, RIDGE_CAMPUS, FACULTY)
                .build(),
            EmployeeBuilder::new(7, "Lost", "Record")
                .payroll("A400")
                .campus(999)
                .build(),
        ],
    }
}

/// `count` active employees with payroll ids, all on the north campus.
pub fn bulk_dataset(count: i64) -> Dataset {
    let mut dataset = dataset();
    dataset.employees = (1..=count)
        .map(|id| {
            EmployeeBuilder::new(id, "Bulk", &format!("Employee{id:04}"))
                .payroll(&format!("B{id:04}"))
                .placed(ENG, NORTH_CAMPUS, STAFF)
                .build()
        })
        .collect();
    dataset
}

pub struct EmployeeBuilder {
    employee: Employee,
}

impl EmployeeBuilder {
    pub fn new(id: i64, first_name: &str, last_name: &str) -> Self {
        Self {
            employee: Employee {
                id,
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
                payroll_id: None,
                temp_payroll_id: None,
                active: true,
                department_id: None,
                campus_id: None,
                employee_type_id: None,
                hiring_mode_id: None,
            },
        }
    }

    pub fn payroll(mut self, payroll_id: &str) -> Self {
        self.employee.payroll_id = Some(payroll_id.to_string());
        self
    }

    pub fn temp_payroll(mut self, temp_payroll_id: &str) -> Self {
        self.employee.temp_payroll_id = Some(temp_payroll_id.to_string());
        self
    }

    pub fn placed(mut self, department_id: i64, campus_id: i64, employee_type_id: i64) -> Self {
        self.employee.department_id = Some(department_id);
        self.employee.campus_id = Some(campus_id);
        self.employee.employee_type_id = Some(employee_type_id);
        self
    }

    pub fn campus(mut self, campus_id: i64) -> Self {
        self.employee.campus_id = Some(campus_id);
        self
    }

    pub fn hired(mut self, hiring_mode_id: i64) -> Self {
        self.employee.hiring_mode_id = Some(hiring_mode_id);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.employee.active = false;
        self
    }

    pub fn build(self) -> Employee {
        self.employee
    }
}

fn state(id: i64, name: &str) -> State {
    State {
        id,
        name: name.to_string(),
    }
}

fn city(id: i64, name: &str, state_id: i64) -> City {
    City {
        id,
        name: name.to_string(),
        state_id: Some(state_id),
    }
}

fn campus(id: i64, name: &str, city_id: i64, state_id: i64, category_id: i64) -> Campus {
    Campus {
        id,
        name: name.to_string(),
        code: Some(format!("C{id}")),
        campus_type: Some("Academic".to_string()),
        city_id: Some(city_id),
        state_id: Some(state_id),
        category_id: Some(category_id),
    }
}

/// Insert every table of `dataset` into a migrated schema, keeping ids.
pub async fn seed(pool: &PgPool, dataset: &Dataset) -> anyhow::Result<()> {
    let mut tx = pool.begin().await.context("begin seed transaction")?;

    for s in &dataset.states {
        sqlx::query("INSERT INTO states (id, name) VALUES ($1, $2)")
            .bind(s.id)
            .bind(&s.name)
            .execute(&mut *tx)
            .await
            .context("insert state")?;
    }
    for c in &dataset.cities {
        sqlx::query("INSERT INTO cities (id, name, state_id) VALUES ($1, $2, $3)")
            .bind(c.id)
            .bind(&c.name)
            .bind(c.state_id)
            .execute(&mut *tx)
            .await
            .context("insert city")?;
    }
    for cc in &dataset.campus_categories {
        sqlx::query("INSERT INTO campus_categories (id, name) VALUES ($1, $2)")
            .bind(cc.id)
            .bind(&cc.name)
            .execute(&mut *tx)
            .await
            .context("insert campus category")?;
    }
    for c in &dataset.campuses {
        sqlx::query(
            "INSERT INTO campuses (id, name, code, type, city_id, state_id, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(c.id)
        .bind(&c.name)
        .bind(&c.code)
        .bind(&c.campus_type)
        .bind(c.city_id)
        .bind(c.state_id)
        .bind(c.category_id)
        .execute(&mut *tx)
        .await
        .context("insert campus")?;
    }
    for (table, rows) in [
        (
            "departments",
            dataset
                .departments
                .iter()
                .map(|d| (d.id, d.name.as_str()))
                .collect::<Vec<_>>(),
        ),
        (
            "employee_types",
            dataset
                .employee_types
                .iter()
                .map(|t| (t.id, t.name.as_str()))
                .collect(),
        ),
        (
            "hiring_modes",
            dataset
                .hiring_modes
                .iter()
                .map(|h| (h.id, h.name.as_str()))
                .collect(),
        ),
    ] {
        for (id, name) in rows {
            sqlx::query(&format!("INSERT INTO {table} (id, name) VALUES ($1, $2)"))
                .bind(id)
                .bind(name)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("insert into {table}"))?;
        }
    }
    for e in &dataset.employees {
        sqlx::query(
            "INSERT INTO employees (id, first_name, last_name, payroll_id, temp_payroll_id, \
             active, department_id, campus_id, employee_type_id, hiring_mode_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(e.id)
        .bind(&e.first_name)
        .bind(&e.last_name)
        .bind(&e.payroll_id)
        .bind(&e.temp_payroll_id)
        .bind(e.active)
        .bind(e.department_id)
        .bind(e.campus_id)
        .bind(e.employee_type_id)
        .bind(e.hiring_mode_id)
        .execute(&mut *tx)
        .await
        .context("insert employee")?;
    }

    tx.commit().await.context("commit seed transaction")?;
    Ok(())
}
