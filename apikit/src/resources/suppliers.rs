use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::types::{
    ActionOutcome, NewPurchaseOrder, PurchaseOrder, Supplier, SupplierPayload,
};

pub async fn list(gateway: &HttpGateway, active_only: bool) -> Result<Vec<Supplier>, ApiError> {
    gateway
        .get_query("/suppliers/", &[("active_only", active_only)])
        .await
}

pub async fn get(gateway: &HttpGateway, id: i64) -> Result<Supplier, ApiError> {
    gateway.get(&format!("/suppliers/{}", id)).await
}

pub async fn create(
    gateway: &HttpGateway,
    payload: &SupplierPayload,
) -> Result<Supplier, ApiError> {
    gateway.post_json("/suppliers/", payload).await
}

pub async fn update(
    gateway: &HttpGateway,
    id: i64,
    payload: &SupplierPayload,
) -> Result<Supplier, ApiError> {
    gateway
        .put_json(&format!("/suppliers/{}", id), payload)
        .await
}

pub async fn delete(gateway: &HttpGateway, id: i64) -> Result<ActionOutcome, ApiError> {
    gateway.delete(&format!("/suppliers/{}", id)).await
}

/// One POST per user action; the gateway never retries mutations, so
/// this side cannot double-submit an order.
pub async fn create_purchase_order(
    gateway: &HttpGateway,
    order: &NewPurchaseOrder,
) -> Result<PurchaseOrder, ApiError> {
    gateway.post_json("/suppliers/purchase-orders", order).await
}

pub async fn purchase_orders(
    gateway: &HttpGateway,
    supplier_id: Option<i64>,
    status: Option<&str>,
) -> Result<Vec<PurchaseOrder>, ApiError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(supplier_id) = supplier_id {
        query.push(("supplier_id", supplier_id.to_string()));
    }
    if let Some(status) = status {
        query.push(("status", status.to_string()));
    }
    gateway
        .get_query("/suppliers/purchase-orders", &query)
        .await
}
