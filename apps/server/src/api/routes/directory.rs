//! Reference data API Routes
//!
//! Lookups used to populate search filters.

use crate::api::handlers::directory;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/states", get(directory::list_states))
        .route("/states/:id/cities", get(directory::list_state_cities))
        .route("/campuses", get(directory::list_campuses))
        .route("/campus-categories", get(directory::list_campus_categories))
        .route("/departments", get(directory::list_departments))
        .route("/employee-types", get(directory::list_employee_types))
        .route("/hiring-modes", get(directory::list_hiring_modes))
}
