use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Auth

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

// ---------------------------------------------------------------------------
// Inventory

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    pub id: i64,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub mrp: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub storage_requirements: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub id: i64,
    pub batch_number: String,
    pub quantity: i64,
    pub expiry_date: DateTime<Utc>,
    // Server-computed facts, read-only on this side.
    #[serde(default)]
    pub is_expired: bool,
    #[serde(default)]
    pub is_damaged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockLevel {
    pub medicine_id: i64,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub total_quantity: i64,
    #[serde(default)]
    pub nearest_expiry: Option<DateTime<Utc>>,
}

/// Filters for the medicine list. Serializes straight into the query
/// string; `None` fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicineFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Outcome of a bulk spreadsheet import. Transient; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadReport {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub total_rows: i64,
    #[serde(default)]
    pub success_count: i64,
    #[serde(default)]
    pub error_count: i64,
    #[serde(default)]
    pub warning_count: i64,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Free-text analysis blobs (inventory analysis report, supplier
/// analysis). Rendered as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceComparison {
    pub medicine_id: i64,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub mrp: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub margin_percent: Option<f64>,
}

// ---------------------------------------------------------------------------
// Alerts

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: i64,
    pub alert_type: String,
    #[serde(default)]
    pub medicine_id: Option<i64>,
    #[serde(default)]
    pub batch_id: Option<i64>,
    pub message: String,
    pub severity: String,
    pub is_acknowledged: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledged: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertStats {
    pub total_alerts: i64,
    pub unacknowledged: i64,
    #[serde(default)]
    pub by_type: HashMap<String, i64>,
    #[serde(default)]
    pub by_severity: HashMap<String, i64>,
}

/// Acknowledgements and system scans answer with a bare message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Forecasting

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub medicine_id: i64,
    pub medicine_name: String,
    pub sku: String,
    pub forecasted_demand: f64,
    pub reorder_point: f64,
    pub recommended_quantity: f64,
    pub confidence_score: f64,
    #[serde(default)]
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderSuggestion {
    pub medicine_id: i64,
    pub medicine_name: String,
    pub sku: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Sellable units (excludes expired stock).
    pub current_stock: i64,
    #[serde(default)]
    pub total_physical_stock: i64,
    #[serde(default)]
    pub expired_stock: i64,
    /// "critical" | "low_stock" | "at_risk" | "healthy"
    pub priority: String,
    #[serde(default)]
    pub forecasted_demand: f64,
    #[serde(default)]
    pub reorder_point: f64,
    #[serde(default)]
    pub recommended_quantity: f64,
    #[serde(default)]
    pub confidence_score: f64,
    #[serde(default)]
    pub reasoning: String,
}

// ---------------------------------------------------------------------------
// Suppliers & purchase orders

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierPayload {
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    pub medicine_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPurchaseOrder {
    pub supplier_id: i64,
    pub items: Vec<PurchaseOrderItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub supplier_id: i64,
    #[serde(default)]
    pub supplier_name: Option<String>,
    pub status: String,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Prescription orders

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub contact_info: String,
    /// "sms" | "email" | "whatsapp"
    pub notification_method: String,
    #[serde(default)]
    pub prescription_image_path: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionOrder {
    pub id: i64,
    pub customer_name: String,
    pub contact_info: String,
    pub notification_method: String,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Response to a prescription image upload: where the server stored it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionUpload {
    pub file_path: String,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Dashboard aggregates

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total_stock_value: f64,
    pub total_skus: i64,
    pub low_stock_count: i64,
    pub expiring_soon_count: i64,
    pub total_alerts: i64,
    pub wastage_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiryBucket {
    /// e.g. "0-30 days", "31-60 days"
    pub bucket: String,
    pub value: f64,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStock {
    pub category: String,
    pub total_value: f64,
    #[serde(default)]
    pub total_quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    pub quantity: i64,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMedicine {
    pub medicine_id: i64,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(default)]
    pub value: Option<f64>,
}

// ---------------------------------------------------------------------------
// Waste analytics

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WasteBucket {
    pub quantity: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WasteTotal {
    pub quantity: i64,
    pub value: f64,
    #[serde(default)]
    pub wastage_rate_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WasteAnalytics {
    #[serde(default)]
    pub expired: WasteBucket,
    #[serde(default)]
    pub damaged: WasteBucket,
    #[serde(default)]
    pub recalled: WasteBucket,
    #[serde(default)]
    pub returned: WasteBucket,
    #[serde(default)]
    pub total: WasteTotal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteItem {
    pub medicine_name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryWaste {
    pub category: String,
    pub quantity: i64,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// Chatbot

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub session_id: String,
    #[serde(default)]
    pub suggested_actions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSuggestions {
    pub suggestions: Vec<String>,
}

fn default_true() -> bool {
    true
}
