//! Health & readiness handlers.
//!
//! - GET /api/health -> static liveness (`{"status":"ok"}`)
//! - GET /api/ready  -> readiness that checks SQLite connectivity

use crate::services::metadata_service::MetadataService;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::HashMap;

/// `GET /api/health`
///
/// Always returns 200 OK and never touches the database.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

/// `GET /api/ready`
///
/// Runs `SELECT 1` against SQLite. HTTP 200 when it works, 503 otherwise.
pub async fn readyz(State(service): State<MetadataService>) -> impl IntoResponse {
    let sqlite_check = match service.ping().await {
        Ok(()) => CheckStatus {
            ok: true,
            error: None,
        },
        Err(e) => CheckStatus {
            ok: false,
            error: Some(format!("error: {}", e)),
        },
    };
    let overall_ok = sqlite_check.ok;

    let mut checks = HashMap::new();
    checks.insert("sqlite", sqlite_check);

    let body = ReadyResponse {
        status: if overall_ok {
            "ok".into()
        } else {
            "error".into()
        },
        checks,
    };

    let status = if overall_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(body))
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct ReadyResponse {
    status: String,
    checks: HashMap<&'static str, CheckStatus>,
}

#[derive(Serialize)]
struct CheckStatus {
    ok: bool,
    error: Option<String>,
}
