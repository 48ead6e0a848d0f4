use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::types::{ActionOutcome, CategoryWaste, WasteAnalytics, WasteItem};

pub async fn analytics(
    gateway: &HttpGateway,
    category: Option<&str>,
) -> Result<WasteAnalytics, ApiError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(category) = category {
        query.push(("category", category.to_string()));
    }
    gateway.get_query("/waste/analytics", &query).await
}

pub async fn top_waste_items(gateway: &HttpGateway, limit: u32) -> Result<Vec<WasteItem>, ApiError> {
    gateway
        .get_query("/waste/top-waste-items", &[("limit", limit)])
        .await
}

pub async fn by_category(gateway: &HttpGateway) -> Result<Vec<CategoryWaste>, ApiError> {
    gateway.get("/waste/by-category").await
}

pub async fn mark_expired(gateway: &HttpGateway, batch_id: i64) -> Result<ActionOutcome, ApiError> {
    gateway
        .post_empty(&format!("/waste/mark-expired/{}", batch_id))
        .await
}

pub async fn mark_damaged(gateway: &HttpGateway, batch_id: i64) -> Result<ActionOutcome, ApiError> {
    gateway
        .post_empty(&format!("/waste/mark-damaged/{}", batch_id))
        .await
}
