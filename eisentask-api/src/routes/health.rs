/// Health check endpoint
///
/// Provides a simple health check endpoint that verifies:
/// - The server is running
/// - The data directory is reachable
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "storage": "available",
///   "timestamp": "2024-03-15T10:00:00Z"
/// }
/// ```
use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Application version
    pub version: String,

    /// Data directory status
    pub storage: String,

    /// Server time at the moment of the check
    pub timestamp: DateTime<Utc>,
}

/// Health check handler
///
/// Returns service health status including data directory reachability.
/// The check stats the configured data directory rather than touching
/// any user file.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let storage_status = match tokio::fs::metadata(&state.config.storage.data_dir).await {
        Ok(meta) if meta.is_dir() => "available",
        _ => "unavailable",
    };

    Ok(Json(HealthResponse {
        status: if storage_status == "available" {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: storage_status.to_string(),
        timestamp: Utc::now(),
    }))
}
