//! Reference data and employee read handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use staffline_models::{
    Campus, CampusCategory, City, Department, EmployeeSearchRecord, EmployeeType, HiringMode,
    State as StateRecord,
};

use crate::db::traits::CampusFilter;
use crate::state::AppState;
use crate::{Error, Result};

pub async fn list_states(State(state): State<AppState>) -> Result<Json<Vec<StateRecord>>> {
    Ok(Json(state.directory_service.states().await?))
}

pub async fn list_state_cities(
    State(state): State<AppState>,
    Path(state_id): Path<i64>,
) -> Result<Json<Vec<City>>> {
    Ok(Json(state.directory_service.cities(Some(state_id)).await?))
}

pub async fn list_campuses(
    State(state): State<AppState>,
    filter: std::result::Result<Query<CampusFilter>, QueryRejection>,
) -> Result<Json<Vec<Campus>>> {
    let Query(filter) = filter.map_err(|e| Error::Validation(e.body_text()))?;
    Ok(Json(state.directory_service.campuses(filter).await?))
}

pub async fn list_campus_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CampusCategory>>> {
    Ok(Json(state.directory_service.campus_categories().await?))
}

pub async fn list_departments(State(state): State<AppState>) -> Result<Json<Vec<Department>>> {
    Ok(Json(state.directory_service.departments().await?))
}

pub async fn list_employee_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeType>>> {
    Ok(Json(state.directory_service.employee_types().await?))
}

pub async fn list_hiring_modes(State(state): State<AppState>) -> Result<Json<Vec<HiringMode>>> {
    Ok(Json(state.directory_service.hiring_modes().await?))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeSearchRecord>> {
    Ok(Json(state.directory_service.employee(id).await?))
}
