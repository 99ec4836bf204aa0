use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{db::list_collections, state::AppState};

pub const SERVICE_NAME: &str = "Handmade by Rama";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConnectionReport {
    pub backend: String,
    pub database: String,
    pub collections: Vec<String>,
    pub rate: i64,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service identity", body = ServiceInfo),
    ),
    tag = "Health"
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        status: "ok".to_string(),
    })
}

/// Report database reachability without failing the request.
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Backend and database status", body = ConnectionReport),
    ),
    tag = "Health"
)]
pub async fn connection_status(State(state): State<AppState>) -> Json<ConnectionReport> {
    let mut report = ConnectionReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        collections: Vec::new(),
        rate: state.usd_to_syp,
    };

    match list_collections(&state.orm).await {
        Ok(collections) => {
            report.database = "✅ Connected".to_string();
            report.collections = collections;
        }
        Err(err) => {
            tracing::warn!(error = %err, "database connectivity check failed");
            let reason: String = err.to_string().chars().take(120).collect();
            report.database = format!("❌ {reason}");
        }
    }

    Json(report)
}
