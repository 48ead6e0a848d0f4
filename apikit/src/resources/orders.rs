use crate::errors::ApiError;
use crate::gateway::http::HttpGateway;
use crate::gateway::upload::validate_upload;
use crate::types::{NewOrder, PrescriptionOrder, PrescriptionUpload};

pub async fn create(gateway: &HttpGateway, order: &NewOrder) -> Result<PrescriptionOrder, ApiError> {
    gateway.post_json("/orders/create", order).await
}

/// Store a prescription file server-side; the returned path goes into
/// the order payload. Same pre-flight validation as every upload.
pub async fn upload_prescription(
    gateway: &HttpGateway,
    file_name: &str,
    contents: Vec<u8>,
) -> Result<PrescriptionUpload, ApiError> {
    validate_upload(file_name, contents.len() as u64)?;

    let part = reqwest::multipart::Part::bytes(contents).file_name(file_name.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);
    gateway
        .post_multipart("/orders/upload-prescription", form)
        .await
}

pub async fn list(gateway: &HttpGateway) -> Result<Vec<PrescriptionOrder>, ApiError> {
    gateway.get("/orders/").await
}
