use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::gateway::upload::validate_upload;
use crate::types::{
    ActionOutcome, AnalysisReport, Batch, Medicine, MedicineFilter, PriceComparison, StockLevel,
    UploadReport,
};

pub async fn medicines(
    gateway: &HttpGateway,
    filter: &MedicineFilter,
) -> Result<Vec<Medicine>, ApiError> {
    gateway.get_query("/inventory/medicines", filter).await
}

pub async fn medicine(gateway: &HttpGateway, id: i64) -> Result<Medicine, ApiError> {
    gateway.get(&format!("/inventory/medicines/{}", id)).await
}

pub async fn delete_medicine(gateway: &HttpGateway, id: i64) -> Result<ActionOutcome, ApiError> {
    gateway
        .delete(&format!("/inventory/medicines/{}", id))
        .await
}

pub async fn batches(gateway: &HttpGateway, medicine_id: i64) -> Result<Vec<Batch>, ApiError> {
    gateway
        .get(&format!("/inventory/medicines/{}/batches", medicine_id))
        .await
}

pub async fn stock_levels(
    gateway: &HttpGateway,
    low_stock_only: bool,
) -> Result<Vec<StockLevel>, ApiError> {
    gateway
        .get_query(
            "/inventory/stock-levels",
            &[("low_stock_only", low_stock_only)],
        )
        .await
}

pub async fn categories(gateway: &HttpGateway) -> Result<Vec<String>, ApiError> {
    gateway.get("/inventory/categories").await
}

/// Bulk import. Validation happens before the form is assembled, so a
/// bad file never reaches the network.
pub async fn upload(
    gateway: &HttpGateway,
    file_name: &str,
    contents: Vec<u8>,
) -> Result<UploadReport, ApiError> {
    validate_upload(file_name, contents.len() as u64)?;

    let part = reqwest::multipart::Part::bytes(contents).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);
    gateway.post_multipart("/inventory/upload-excel", form).await
}

pub async fn price_comparison(gateway: &HttpGateway) -> Result<Vec<PriceComparison>, ApiError> {
    gateway.get("/inventory/price-comparison").await
}

pub async fn analysis_report(gateway: &HttpGateway) -> Result<AnalysisReport, ApiError> {
    gateway.get("/inventory/analysis-report").await
}
