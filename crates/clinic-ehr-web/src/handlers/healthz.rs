//! Liveness endpoint.

use axum::Json;
use serde_json::{json, Value};

/// `GET /healthz` — process is up and serving.
pub async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
