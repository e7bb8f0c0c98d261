//! Employee search handlers
//!
//! - `GET  /api/employees/search/{variant}?stateId=..&identifierClause=..&offset=..&limit=..`
//! - `POST /api/employees/search/{variant}?offset=..&limit=..` with a JSON request body
//!
//! Both return the page as JSON and repeat the total match count in the
//! `x-total-count` header.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::HeaderValue,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use staffline_models::{EmployeeSearchRecord, EmployeeSearchRequest, SearchPage};

use crate::db::search::SearchVariant;
use crate::request_context::RequestContext;
use crate::state::AppState;
use crate::{Error, Result};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Paging parameters accepted by both methods.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// Query-string form of a search request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub state_id: Option<i64>,
    pub city_id: Option<i64>,
    pub campus_id: Option<i64>,
    pub department_id: Option<i64>,
    pub employee_type_id: Option<i64>,
    pub category_name: Option<String>,
    pub identifier_clause: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl SearchQuery {
    fn into_parts(self) -> (EmployeeSearchRequest, PageParams) {
        let request = EmployeeSearchRequest {
            state_id: self.state_id,
            city_id: self.city_id,
            campus_id: self.campus_id,
            department_id: self.department_id,
            employee_type_id: self.employee_type_id,
            category_name: self.category_name,
            identifier_clause: self.identifier_clause,
        };
        let page = PageParams {
            offset: self.offset,
            limit: self.limit,
        };
        (request, page)
    }
}

pub async fn search_employees_get(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    context: Option<Extension<RequestContext>>,
    query: std::result::Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response> {
    let variant: SearchVariant = variant.parse()?;
    let Query(query) = query.map_err(|e| Error::Validation(e.body_text()))?;
    let (request, page) = query.into_parts();

    run_search(&state, variant, &request, page, context).await
}

pub async fn search_employees_post(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    context: Option<Extension<RequestContext>>,
    page: std::result::Result<Query<PageParams>, QueryRejection>,
    body: std::result::Result<Json<EmployeeSearchRequest>, JsonRejection>,
) -> Result<Response> {
    let variant: SearchVariant = variant.parse()?;
    let Query(page) = page.map_err(|e| Error::Validation(e.body_text()))?;
    let Json(request) = body.map_err(|e| Error::Validation(e.body_text()))?;

    run_search(&state, variant, &request, page, context).await
}

async fn run_search(
    state: &AppState,
    variant: SearchVariant,
    request: &EmployeeSearchRequest,
    page: PageParams,
    context: Option<Extension<RequestContext>>,
) -> Result<Response> {
    let page = state.search_service.page_request(page.offset, page.limit)?;
    let result = state
        .search_service
        .search_with_page(variant, request, page)
        .await;

    if let (Err(e), Some(Extension(ctx))) = (&result, &context) {
        if !e.is_client_error() {
            tracing::error!(request_id = %ctx.request_id, variant = %variant, "Search failed");
        }
    }

    Ok(page_response(result?))
}

fn page_response(page: SearchPage<EmployeeSearchRecord>) -> Response {
    let total = page.total_count;
    let mut response = Json(page).into_response();
    if let Ok(value) = HeaderValue::from_str(&total.to_string()) {
        response.headers_mut().insert(TOTAL_COUNT_HEADER, value);
    }
    response
}
