//! Employee API Routes

use crate::api::handlers::{directory, search};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees/search/:variant",
            get(search::search_employees_get).post(search::search_employees_post),
        )
        .route("/employees/:id", get(directory::get_employee))
}
