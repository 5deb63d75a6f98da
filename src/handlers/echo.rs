use axum::{body::Bytes, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

// ── POST /api/echo ────────────────────────────────────────────────────────────

/// Echoes any JSON body back unchanged. The body is read raw so the
/// `Content-Type` header plays no part; an empty body echoes as `null`.
pub async fn echo(body: Bytes) -> AppResult<(StatusCode, Json<Value>)> {
    let payload = parse_payload(&body)?;
    debug!(bytes = body.len(), "Echoing payload");

    Ok((
        StatusCode::OK,
        Json(json!({
            "echo": payload,
            "message": "Data echoed back successfully",
        })),
    ))
}

fn parse_payload(body: &[u8]) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "Rejected malformed echo body");
        AppError::BadRequest("Malformed JSON body".to_string())
    })
}
