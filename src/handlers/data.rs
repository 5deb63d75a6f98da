use axum::{extract::Path, http::StatusCode, Json};
use serde_json::json;
use tracing::debug;

use crate::{
    error::{AppError, AppResult},
    models::Item,
};

// ── GET /api/data ─────────────────────────────────────────────────────────────

pub async fn list_items() -> (StatusCode, Json<serde_json::Value>) {
    let items = Item::all();
    debug!(count = items.len(), "Listed items");

    (
        StatusCode::OK,
        Json(json!({
            "data": items,
            "message": "Data retrieved successfully",
        })),
    )
}

// ── GET /api/data/:id ─────────────────────────────────────────────────────────

pub async fn get_item(
    Path(raw_id): Path<String>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let id = parse_item_id(&raw_id)?;
    let item = Item::find(id).ok_or(AppError::ItemNotFound)?;

    debug!(id, "Fetched item");

    Ok((
        StatusCode::OK,
        Json(json!({
            "data": item,
            "message": "Item retrieved successfully",
        })),
    ))
}

/// Only a plain run of ASCII digits matches the route; signs, blanks and
/// anything else get the generic not-found body. Digits too large for an
/// `i64` are still an id, just one that names no item.
fn parse_item_id(raw: &str) -> AppResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::EndpointNotFound);
    }
    raw.parse().map_err(|_| AppError::ItemNotFound)
}
