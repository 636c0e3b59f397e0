//! # Health Check Handler

use axum::Json;
use serde_json::{json, Value};

/// GET /health
///
/// ```json
/// { "status": "healthy", "service": "members-club" }
/// ```
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "members-club"
    }))
}
