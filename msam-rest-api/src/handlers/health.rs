//! Health check endpoint

use axum::{extract::State, response::IntoResponse, Json};
use msam_interfaces::{Repository, StorageResult};
use std::{collections::HashMap, time::Instant};
use tracing::info;

use crate::{
    context::ChannelsContext,
    models::common::{HealthCheckResult, HealthResponse, HealthStatus},
};

/// Health check with storage checks
///
/// Always answers `200 OK`; the body reports each backend.
pub async fn health_check(State(ctx): State<ChannelsContext>) -> impl IntoResponse {
    info!("Health check requested");

    let mut checks = HashMap::new();
    checks.insert(
        "channel_table".to_string(),
        run_check(&**ctx.registry.table()).await,
    );
    checks.insert(
        "settings_store".to_string(),
        run_check(&**ctx.registry.settings()).await,
    );

    Json(HealthResponse::healthy().with_checks(checks))
}

async fn run_check<R: Repository + ?Sized>(repository: &R) -> HealthCheckResult {
    let start = Instant::now();
    let outcome: StorageResult<()> = repository.health_check().await;
    let duration_ms = Some(u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX));

    match outcome {
        Ok(()) => HealthCheckResult {
            status: HealthStatus::Healthy,
            message: None,
            duration_ms,
        },
        Err(e) => HealthCheckResult {
            status: HealthStatus::Unhealthy,
            message: Some(e.to_string()),
            duration_ms,
        },
    }
}
