//! Model phase: JSON → Rust types + id index construction.

pub mod index;
pub mod types;

pub use index::MenuIndex;
pub use types::*;

use serde_json::Value;

use crate::error::{NodeParseError, RepositoryError};

/// Deserialize one API page, checking the pagination metadata the repository
/// relies on to know how many further pages exist.
pub fn parse_page(json: &str, page: u64) -> Result<Page, RepositoryError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| RepositoryError::malformed(page, format!("invalid JSON: {}", e)))?;

    let Some(meta) = value.get("pagination") else {
        return Err(RepositoryError::malformed(page, "missing pagination metadata"));
    };
    if !meta.is_object() {
        return Err(RepositoryError::malformed(page, "pagination metadata is not an object"));
    }

    let pagination = Pagination {
        current_page: count_field(meta, "current_page", page)?,
        per_page: count_field(meta, "per_page", page)?,
        total: count_field(meta, "total", page)?,
    };
    if pagination.per_page == 0 {
        return Err(RepositoryError::malformed(
            page,
            "pagination.per_page must be greater than zero",
        ));
    }

    let Some(menus) = value.get("menus") else {
        return Err(RepositoryError::malformed(page, "missing 'menus' array"));
    };
    let menus: Vec<MenuNode> = serde_json::from_value(menus.clone())
        .map_err(|e| RepositoryError::malformed(page, format!("invalid menu record: {}", e)))?;

    Ok(Page { menus, pagination })
}

/// Deserialize a bare JSON array of nodes (already fully materialized).
pub fn parse_nodes(json: &str) -> Result<Vec<MenuNode>, NodeParseError> {
    Ok(serde_json::from_str(json)?)
}

fn count_field(meta: &Value, field: &str, page: u64) -> Result<u64, RepositoryError> {
    match meta.get(field) {
        None => Err(RepositoryError::malformed(page, format!("missing pagination.{}", field))),
        Some(v) => v.as_u64().ok_or_else(|| {
            RepositoryError::malformed(
                page,
                format!("pagination.{} is not a non-negative integer: {}", field, v),
            )
        }),
    }
}
