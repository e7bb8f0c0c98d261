use anyhow::Context as _;
use axum::http::{HeaderMap, StatusCode};
use serde_json::Value;

/// Ids of the rows in a search page, in response order.
pub fn page_ids(page: &Value) -> anyhow::Result<Vec<i64>> {
    page.get("rows")
        .and_then(|v| v.as_array())
        .context("page.rows is array")?
        .iter()
        .map(|row| row.get("id").and_then(|v| v.as_i64()).context("row.id is integer"))
        .collect()
}

pub fn total_count(page: &Value) -> anyhow::Result<i64> {
    page.get("totalCount")
        .and_then(|v| v.as_i64())
        .context("page.totalCount is integer")
}

/// Assert a successful search page with exactly `expected` ids.
pub fn assert_page(status: StatusCode, page: &Value, expected: &[i64]) -> anyhow::Result<()> {
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {page}");
    assert_eq!(page_ids(page)?, expected, "unexpected rows, body: {page}");
    Ok(())
}

/// Assert the `x-total-count` header agrees with the body.
pub fn assert_total_header(headers: &HeaderMap, page: &Value) -> anyhow::Result<()> {
    let header = headers
        .get("x-total-count")
        .context("x-total-count header present")?
        .to_str()
        .context("x-total-count is ASCII")?;
    assert_eq!(header, total_count(page)?.to_string());
    Ok(())
}

/// Assert a JSON error body with the given status and error code.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, code: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(
        body.get("status").and_then(|v| v.as_u64()),
        Some(u64::from(expected.as_u16()))
    );
    assert_eq!(body.get("code").and_then(|v| v.as_str()), Some(code));
}

/// Names of a directory listing, in response order.
pub fn names(list: &Value) -> anyhow::Result<Vec<String>> {
    list.as_array()
        .context("listing is array")?
        .iter()
        .map(|item| {
            item.get("name")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .context("item.name is string")
        })
        .collect()
}
