use axum::{
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::json;
use tracing::info;

use crate::models::UserInfo;

// ── GET /api/user ─────────────────────────────────────────────────────────────

pub async fn get_user_info(headers: HeaderMap) -> (StatusCode, Json<serde_json::Value>) {
    let user = UserInfo::from_headers(&headers);

    info!(
        username = %user.username,
        groups = user.groups.len(),
        "User info request"
    );

    (
        StatusCode::OK,
        Json(json!({
            "user": user,
            "message": "User information retrieved successfully",
        })),
    )
}
