use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::types::{CategoryStock, DashboardStats, ExpiryBucket, SalesPoint, TopMedicine};

pub async fn stats(gateway: &HttpGateway) -> Result<DashboardStats, ApiError> {
    gateway.get("/dashboard/stats").await
}

pub async fn expiry_timeline(gateway: &HttpGateway) -> Result<Vec<ExpiryBucket>, ApiError> {
    gateway.get("/dashboard/expiry-timeline").await
}

pub async fn inventory_by_category(gateway: &HttpGateway) -> Result<Vec<CategoryStock>, ApiError> {
    gateway.get("/dashboard/inventory-by-category").await
}

pub async fn sales_trends(gateway: &HttpGateway, days: u32) -> Result<Vec<SalesPoint>, ApiError> {
    gateway
        .get_query("/dashboard/sales-trends", &[("days", days)])
        .await
}

pub async fn top_medicines(
    gateway: &HttpGateway,
    limit: u32,
    by: &str,
) -> Result<Vec<TopMedicine>, ApiError> {
    gateway
        .get_query(
            "/dashboard/top-medicines",
            &[("limit", limit.to_string()), ("by", by.to_string())],
        )
        .await
}
