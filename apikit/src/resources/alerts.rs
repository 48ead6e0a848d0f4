use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::types::{ActionOutcome, Alert, AlertFilter, AlertStats};

pub async fn list(gateway: &HttpGateway, filter: &AlertFilter) -> Result<Vec<Alert>, ApiError> {
    gateway.get_query("/alerts/", filter).await
}

pub async fn unacknowledged(gateway: &HttpGateway) -> Result<Vec<Alert>, ApiError> {
    gateway.get("/alerts/unacknowledged").await
}

/// The server treats a repeat acknowledge as a no-op; callers see a
/// plain success either way.
pub async fn acknowledge(gateway: &HttpGateway, alert_id: i64) -> Result<ActionOutcome, ApiError> {
    gateway
        .post_empty(&format!("/alerts/{}/acknowledge", alert_id))
        .await
}

pub async fn stats(gateway: &HttpGateway) -> Result<AlertStats, ApiError> {
    gateway.get("/alerts/stats").await
}

/// Full low-stock + expiry sweep server-side.
pub async fn run_system_scan(gateway: &HttpGateway) -> Result<ActionOutcome, ApiError> {
    gateway.post_empty("/alerts/run-system-scan").await
}
