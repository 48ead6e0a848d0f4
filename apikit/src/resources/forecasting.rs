use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::types::{ActionOutcome, Forecast, ReorderSuggestion};

pub async fn forecast(
    gateway: &HttpGateway,
    medicine_id: i64,
    horizon_days: u32,
) -> Result<Forecast, ApiError> {
    gateway
        .get_query(
            &format!("/forecasting/medicine/{}", medicine_id),
            &[("horizon_days", horizon_days)],
        )
        .await
}

pub async fn reorder_suggestions(
    gateway: &HttpGateway,
    category: Option<&str>,
    critical_only: bool,
) -> Result<Vec<ReorderSuggestion>, ApiError> {
    let mut query: Vec<(&str, String)> = vec![("critical_only", critical_only.to_string())];
    if let Some(category) = category {
        query.push(("category", category.to_string()));
    }
    gateway
        .get_query("/forecasting/reorder-suggestions", &query)
        .await
}

/// Kick off a server-side forecast over the whole catalogue.
pub async fn batch_forecast(gateway: &HttpGateway) -> Result<ActionOutcome, ApiError> {
    gateway.post_empty("/forecasting/batch-forecast").await
}
